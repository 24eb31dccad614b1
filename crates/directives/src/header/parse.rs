//! Lenient and strict scanning of raw header strings.
//!
//! Both modes share one scanner: the input is trimmed, ASCII case-folded,
//! stripped of an optional leading `name:` prefix and split on the
//! definition's separator. Each fragment is then claimed by the directive
//! whose name matches with the longest name winning, so prefix-sharing
//! names (`script-src` / `script-src-elem`) resolve deterministically.
//!
//! The lenient mode ([`HeaderDef::parse`], [`HeaderDef::normalize`]) drops
//! anything it cannot place and lets the last writer win on duplicates; it
//! reconstructs a best effort of whatever the remote peer sent. The strict
//! mode ([`HeaderDef::validate`]) rejects unknown, duplicate, empty and
//! malformed fragments and reports the result as a plain boolean.

use tracing::debug;

use crate::directive::Directive;
use crate::error::{BuildError, ParseError};
use crate::utils::strip_prefix_ignore_case;

use super::{DirectiveMap, Header, HeaderDef};

impl HeaderDef {
    /// Best-effort parse of a raw header value (with or without the
    /// `name:` prefix). Unrecognized or malformed fragments are dropped;
    /// duplicate directives resolve to the last occurrence.
    ///
    /// The surviving directive map still goes through normal construction,
    /// so a definition-level transform can reject the result — the only
    /// error path of lenient parsing.
    pub fn parse(&'static self, input: &str) -> Result<Header, BuildError> {
        let values = self.scan(input, false).unwrap_or_default();
        self.from_map(values)
    }

    /// Strict scan: `false` when any fragment is unknown, duplicated,
    /// empty, or fails its directive's own parsing/validation. Never
    /// panics and never returns an error.
    pub fn validate(&self, input: &str) -> bool {
        self.scan(input, true).is_ok()
    }

    /// Parses then re-serializes, producing the canonical form of
    /// arbitrary client-supplied header text. Inputs that began with the
    /// header name keep the `name: value` form; bare values stay bare.
    /// Idempotent: normalizing a normalized string is a no-op.
    pub fn normalize(&'static self, input: &str) -> Result<String, BuildError> {
        let header = self.parse(input)?;
        if strip_prefix_ignore_case(input.trim_start(), self.name).is_some() {
            Ok(header.to_header_string())
        } else {
            Ok(header.to_value_string().to_owned())
        }
    }

    fn scan(&self, input: &str, strict: bool) -> Result<DirectiveMap, ParseError> {
        let folded = input.trim().to_ascii_lowercase();
        let body = match strip_prefix_ignore_case(&folded, self.name) {
            Some(rest) if rest.starts_with(':') => &rest[1..],
            _ => folded.as_str(),
        };

        let mut values = DirectiveMap::new();
        for fragment in body.split(self.fragment_separator()) {
            let segment = fragment.trim();
            if segment.is_empty() {
                if strict {
                    return Err(ParseError::EmptyDirective);
                }
                continue;
            }

            let Some(directive) = self.claim(segment) else {
                if strict {
                    return Err(ParseError::unknown_directive(segment));
                }
                debug!(header = self.name, segment, "ignoring unrecognized directive");
                continue;
            };

            if strict && values.contains_key(directive.key()) {
                return Err(ParseError::duplicate_directive(directive.key()));
            }

            let value = match directive.parse_segment(segment) {
                Ok(value) => value,
                Err(error) => {
                    if strict {
                        return Err(error);
                    }
                    debug!(header = self.name, segment, %error, "dropping malformed directive");
                    continue;
                }
            };

            if let Err(error) = directive.validate(&value) {
                if strict {
                    return Err(directive.invalid_segment(segment));
                }
                debug!(header = self.name, segment, %error, "dropping invalid directive value");
                continue;
            }

            // last writer wins in lenient mode
            values.insert(directive.key(), value);
        }

        Ok(values)
    }

    /// The directive a segment belongs to; the longest matching name wins.
    fn claim(&self, segment: &str) -> Option<&Directive> {
        self.directives.iter().filter(|d| d.matches(segment)).max_by_key(|d| d.name().len())
    }

    fn fragment_separator(&self) -> char {
        self.separator.trim().chars().next().unwrap_or(',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::{DirectiveValue, ListSpec, TokenSpec};

    fn is_token(value: &str) -> bool {
        !value.is_empty() && !value.chars().any(char::is_whitespace)
    }

    static DIRECTIVES: [Directive; 4] = [
        Directive::seconds("max-age", "max_age"),
        Directive::flag("no-cache", "no_cache"),
        Directive::list("src", "src", ListSpec::new(is_token).separated_by(" ")),
        Directive::list("src-elem", "src_elem", ListSpec::new(is_token).separated_by(" ")),
    ];
    static EXAMPLE: HeaderDef = HeaderDef::new("x-example", ",", &DIRECTIVES);

    fn is_policy(value: &str) -> bool {
        matches!(value, "open" | "closed")
    }

    static LITERAL_DIRECTIVES: [Directive; 1] =
        [Directive::token("policy", "policy", TokenSpec::keyword(is_policy).literal())];
    static POLICY: HeaderDef = HeaderDef::new("x-policy", "; ", &LITERAL_DIRECTIVES);

    #[test]
    fn parse_maps_fragments_to_keys() {
        let header = EXAMPLE.parse("max-age=100, no-cache").unwrap();
        assert_eq!(header.get("max_age"), Some(&DirectiveValue::Seconds(100)));
        assert_eq!(header.get("no_cache"), Some(&DirectiveValue::Flag(true)));
    }

    #[test]
    fn parse_is_case_insensitive_and_prefix_tolerant() {
        let header = EXAMPLE.parse("X-Example: Max-Age=100, NO-CACHE").unwrap();
        assert_eq!(header.to_value_string(), "max-age=100,no-cache");
    }

    #[test]
    fn parse_drops_what_it_cannot_place() {
        let header = EXAMPLE.parse("max-age=100, bogus, no-cache=wat, max-age=abc").unwrap();
        assert_eq!(header.to_value_string(), "max-age=100");
    }

    #[test]
    fn parse_lets_the_last_duplicate_win() {
        let header = EXAMPLE.parse("max-age=100, max-age=200").unwrap();
        assert_eq!(header.get("max_age"), Some(&DirectiveValue::Seconds(200)));
    }

    #[test]
    fn longest_name_claims_ambiguous_prefixes() {
        let header = EXAMPLE.parse("src-elem a b, src c").unwrap();
        assert_eq!(
            header.get("src_elem"),
            Some(&DirectiveValue::List(vec!["a".to_owned(), "b".to_owned()]))
        );
        assert_eq!(header.get("src"), Some(&DirectiveValue::List(vec!["c".to_owned()])));
    }

    #[test]
    fn literal_directives_claim_bare_values() {
        let header = POLICY.parse("open").unwrap();
        assert_eq!(header.get("policy"), Some(&DirectiveValue::Token("open".to_owned())));
        assert_eq!(header.to_value_string(), "open");

        let empty = POLICY.parse("sideways").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn validate_accepts_well_formed_input() {
        assert!(EXAMPLE.validate("max-age=100"));
        assert!(EXAMPLE.validate("max-age=100, no-cache"));
        assert!(EXAMPLE.validate("X-Example: max-age=100, no-cache"));
    }

    #[test]
    fn validate_rejects_duplicates_unknowns_and_empties() {
        assert!(!EXAMPLE.validate("max-age=100, no-cache, max-age=100"));
        assert!(!EXAMPLE.validate("max-age=100, bogus"));
        assert!(!EXAMPLE.validate("max-age=100,"));
        assert!(!EXAMPLE.validate(""));
    }

    #[test]
    fn validate_rejects_malformed_values() {
        assert!(!EXAMPLE.validate("max-age=abc"));
        assert!(!EXAMPLE.validate("max-age=-5"));
        assert!(!POLICY.validate("sideways"));
    }

    #[test]
    fn normalize_canonicalizes_order_and_case() {
        assert_eq!(EXAMPLE.normalize("no-cache, max-age=100").unwrap(), "max-age=100,no-cache");
        assert_eq!(
            EXAMPLE.normalize("X-Example: no-cache, max-age=100").unwrap(),
            "x-example: max-age=100,no-cache"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = EXAMPLE.normalize("no-cache, max-age=100, bogus").unwrap();
        let twice = EXAMPLE.normalize(&once).unwrap();
        assert_eq!(once, twice);

        let named = EXAMPLE.normalize("x-example: no-cache,max-age=100").unwrap();
        assert_eq!(EXAMPLE.normalize(&named).unwrap(), named);
    }

    #[test]
    fn round_trip_reproduces_the_canonical_map() {
        let original = EXAMPLE.parse("no-cache, max-age=100, src b a").unwrap();
        let reparsed = EXAMPLE.parse(original.to_value_string()).unwrap();
        assert_eq!(original, reparsed);
    }
}
