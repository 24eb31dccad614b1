//! The `Strict-Transport-Security` header.
//!
//! `max-age` is mandatory: a policy without it is meaningless, so
//! construction (and any update that would remove it) fails. The two flags
//! keep their mixed-case wire spelling; parsing is case-insensitive.

use header_directives::directive::{Directive, FlagKey, SecondsKey};
use header_directives::error::BuildError;
use header_directives::header::{DirectiveMap, HeaderDef};

static DIRECTIVES: [Directive; 3] = [
    Directive::seconds("max-age", "max_age"),
    Directive::flag("includeSubDomains", "include_sub_domains"),
    Directive::flag("preload", "preload"),
];

fn require_max_age(values: DirectiveMap) -> Result<DirectiveMap, BuildError> {
    if !values.contains_key("max_age") {
        return Err(BuildError::missing("max-age"));
    }
    Ok(values)
}

/// The `Strict-Transport-Security` definition.
pub static STRICT_TRANSPORT_SECURITY: HeaderDef =
    HeaderDef::new("strict-transport-security", "; ", &DIRECTIVES).with_transform(require_max_age);

pub const MAX_AGE: SecondsKey = SecondsKey::new("max_age");
pub const INCLUDE_SUB_DOMAINS: FlagKey = FlagKey::new("include_sub_domains");
pub const PRELOAD: FlagKey = FlagKey::new("preload");

#[cfg(test)]
mod tests {
    use super::*;
    use header_directives::duration::Duration;

    #[test]
    fn max_age_is_mandatory() {
        assert_eq!(STRICT_TRANSPORT_SECURITY.empty().unwrap_err(), BuildError::missing("max-age"));
        assert_eq!(
            STRICT_TRANSPORT_SECURITY.builder().flag(PRELOAD, true).build().unwrap_err(),
            BuildError::missing("max-age")
        );

        let header = STRICT_TRANSPORT_SECURITY.builder().seconds(MAX_AGE, Duration::Years(1)).build().unwrap();
        assert_eq!(header.to_value_string(), "max-age=31536000");

        // removal is rejected the same way
        assert_eq!(MAX_AGE.unset(&header).unwrap_err(), BuildError::missing("max-age"));
    }

    #[test]
    fn flags_keep_their_wire_spelling() {
        let header = STRICT_TRANSPORT_SECURITY
            .builder()
            .seconds(MAX_AGE, 31_536_000)
            .flag(INCLUDE_SUB_DOMAINS, true)
            .flag(PRELOAD, true)
            .build()
            .unwrap();
        assert_eq!(header.to_value_string(), "max-age=31536000; includeSubDomains; preload");
    }

    #[test]
    fn parse_is_case_insensitive() {
        let header =
            STRICT_TRANSPORT_SECURITY.parse("Max-Age=63072000; IncludeSubDomains").unwrap();
        assert_eq!(MAX_AGE.get(&header), Some(63_072_000));
        assert!(INCLUDE_SUB_DOMAINS.get(&header));
        assert_eq!(header.to_value_string(), "max-age=63072000; includeSubDomains");
    }

    #[test]
    fn parse_without_max_age_fails_construction() {
        assert!(STRICT_TRANSPORT_SECURITY.parse("includeSubDomains; preload").is_err());
        assert!(STRICT_TRANSPORT_SECURITY.parse("garbage").is_err());
    }

    #[test]
    fn validate_does_not_require_max_age() {
        // strict scanning checks fragments, not cross-directive rules
        assert!(STRICT_TRANSPORT_SECURITY.validate("includeSubDomains"));
        assert!(!STRICT_TRANSPORT_SECURITY.validate("max-age=1; max-age=2"));
    }

    #[test]
    fn normalize_canonicalizes() {
        assert_eq!(
            STRICT_TRANSPORT_SECURITY
                .normalize("Strict-Transport-Security: preload; max-age=600")
                .unwrap(),
            "strict-transport-security: max-age=600; preload"
        );
    }
}
