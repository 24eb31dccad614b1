//! Keyword and string directives.
//!
//! A token directive stores a single string. Keywords constrain the value
//! with an accept predicate (usually a closed enum like COOP's
//! `same-origin`); string directives accept anything and may carry custom
//! encode/decode hooks for non-trivial wire encodings.

use crate::error::{BuildError, ParseError};
use crate::header::Header;
use crate::utils::strip_prefix_ignore_case;

use super::DirectiveValue;

fn accept_any(_: &str) -> bool {
    true
}

/// Configuration for a token directive.
#[derive(Debug, Clone, Copy)]
pub struct TokenSpec {
    pub(crate) separator: &'static str,
    pub(crate) literal: bool,
    pub(crate) accept: fn(&str) -> bool,
    pub(crate) encode: Option<fn(&str) -> String>,
    pub(crate) decode: Option<fn(&str) -> String>,
}

impl TokenSpec {
    /// A keyword directive constrained by `accept`, name/value separated by
    /// a space.
    pub const fn keyword(accept: fn(&str) -> bool) -> Self {
        Self { separator: " ", literal: false, accept, encode: None, decode: None }
    }

    /// A free-form string directive.
    pub const fn text() -> Self {
        Self::keyword(accept_any)
    }

    pub const fn separated_by(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Emits the bare value with no name prefix.
    pub const fn literal(mut self) -> Self {
        self.literal = true;
        self
    }

    pub const fn encoded_with(mut self, encode: fn(&str) -> String) -> Self {
        self.encode = Some(encode);
        self
    }

    pub const fn decoded_with(mut self, decode: fn(&str) -> String) -> Self {
        self.decode = Some(decode);
        self
    }
}

pub(super) fn stringify(name: &str, spec: &TokenSpec, value: &str) -> Option<String> {
    let encoded = match spec.encode {
        Some(encode) => encode(value),
        None => value.to_owned(),
    };

    if encoded.is_empty() {
        return None;
    }
    if spec.literal {
        return Some(encoded);
    }
    Some(format!("{name}{}{encoded}", spec.separator))
}

pub(super) fn parse(name: &str, spec: &TokenSpec, segment: &str) -> Result<DirectiveValue, ParseError> {
    let raw = if spec.literal {
        segment
    } else {
        match strip_prefix_ignore_case(segment, name) {
            Some(rest) => rest.strip_prefix(spec.separator).unwrap_or(rest),
            None => segment,
        }
    };

    let decoded = match spec.decode {
        Some(decode) => decode(raw),
        None => raw.to_owned(),
    };

    if !(spec.accept)(&decoded) {
        return Err(ParseError::invalid_keyword(segment));
    }
    Ok(DirectiveValue::Token(decoded))
}

/// Typed operation carrier for a token directive key.
#[derive(Debug, Clone, Copy)]
pub struct TokenKey {
    key: &'static str,
}

impl TokenKey {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(self) -> &'static str {
        self.key
    }

    pub fn get(self, header: &Header) -> Option<&str> {
        match header.get(self.key) {
            Some(DirectiveValue::Token(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Sets the value; an empty string unsets instead.
    pub fn set(self, header: &Header, value: &str) -> Result<Header, BuildError> {
        if value.is_empty() {
            return self.unset(header);
        }
        header.with(self.key, DirectiveValue::Token(value.to_owned()))
    }

    pub fn unset(self, header: &Header) -> Result<Header, BuildError> {
        header.without(self.key)
    }

    pub fn set_fn(self, value: impl Into<String>) -> impl Fn(Header) -> Result<Header, BuildError> {
        let value = value.into();
        move |header| self.set(&header, &value)
    }

    pub fn unset_fn(self) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.unset(&header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Directive;
    use crate::header::HeaderDef;

    fn is_mode(value: &str) -> bool {
        matches!(value, "fast" | "slow")
    }

    static DIRECTIVES: [Directive; 1] = [Directive::token("mode", "mode", TokenSpec::keyword(is_mode))];
    static TEST: HeaderDef = HeaderDef::new("x-mode", "; ", &DIRECTIVES);

    const MODE: TokenKey = TokenKey::new("mode");

    #[test]
    fn set_validates_keywords() {
        let header = TEST.empty().unwrap();
        let header = MODE.set(&header, "fast").unwrap();
        assert_eq!(MODE.get(&header), Some("fast"));
        assert_eq!(header.to_value_string(), "mode fast");

        assert!(MODE.set(&header, "warp").is_err());
    }

    #[test]
    fn empty_string_unsets() {
        let header = MODE.set(&TEST.empty().unwrap(), "slow").unwrap();
        let header = MODE.set(&header, "").unwrap();
        assert_eq!(MODE.get(&header), None);
        assert_eq!(header.to_value_string(), "");
    }

    #[test]
    fn parse_strips_name_prefix() {
        let spec = TokenSpec::keyword(is_mode);
        assert_eq!(parse("mode", &spec, "mode fast").unwrap(), DirectiveValue::Token("fast".to_owned()));
        assert!(parse("mode", &spec, "mode warp").is_err());
    }

    #[test]
    fn literal_token_is_the_bare_value() {
        let spec = TokenSpec::keyword(is_mode).literal();
        assert_eq!(stringify("mode", &spec, "fast"), Some("fast".to_owned()));
        assert_eq!(parse("mode", &spec, "slow").unwrap(), DirectiveValue::Token("slow".to_owned()));
    }

    #[test]
    fn hooks_round_trip() {
        fn encode(value: &str) -> String {
            format!("\"{value}\"")
        }
        fn decode(value: &str) -> String {
            value.trim_matches('"').to_owned()
        }

        let spec = TokenSpec::text().separated_by("=").encoded_with(encode).decoded_with(decode);
        assert_eq!(stringify("tag", &spec, "abc"), Some("tag=\"abc\"".to_owned()));
        assert_eq!(parse("tag", &spec, "tag=\"abc\"").unwrap(), DirectiveValue::Token("abc".to_owned()));
    }
}
