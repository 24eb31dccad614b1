//! The `Cache-Control` header, request and response variants.
//!
//! Both variants share the common caching directives (`max-age`,
//! `no-cache`, `no-store`, `no-transform`, `stale-if-error`) and the
//! `no-store` precedence rule: once `no-store` is set, every other
//! directive is irrelevant, so construction collapses the map to just
//! `no-store`.
//!
//! Serialization order is the declaration order of the directive tables
//! below and is part of the wire contract; the tests pin it.
//!
//! ```
//! use header_catalog::cache_control::{self, MAX_AGE, NO_CACHE};
//!
//! let header = cache_control::RESPONSE
//!     .builder()
//!     .flag(NO_CACHE, true)
//!     .seconds(MAX_AGE, 300)
//!     .build()
//!     .unwrap();
//! assert_eq!(header.to_value_string(), "max-age=300,no-cache");
//! ```

use header_directives::directive::{Directive, DirectiveValue, FlagKey, SecondsKey};
use header_directives::error::BuildError;
use header_directives::header::{DirectiveMap, HeaderDef};

// Directives shared by both variants.
const MAX_AGE_DIRECTIVE: Directive = Directive::seconds("max-age", "max_age");
const NO_CACHE_DIRECTIVE: Directive = Directive::flag("no-cache", "no_cache");
const NO_STORE_DIRECTIVE: Directive = Directive::flag("no-store", "no_store");
const NO_TRANSFORM_DIRECTIVE: Directive = Directive::flag("no-transform", "no_transform");
const STALE_IF_ERROR_DIRECTIVE: Directive = Directive::seconds("stale-if-error", "stale_if_error");

/// `no-store` overrides every other caching directive.
fn collapse_no_store(values: DirectiveMap) -> Result<DirectiveMap, BuildError> {
    if matches!(values.get("no_store"), Some(DirectiveValue::Flag(true))) {
        let mut collapsed = DirectiveMap::new();
        collapsed.insert("no_store", DirectiveValue::Flag(true));
        return Ok(collapsed);
    }
    Ok(values)
}

static RESPONSE_DIRECTIVES: [Directive; 13] = [
    MAX_AGE_DIRECTIVE,
    Directive::flag("must-revalidate", "must_revalidate"),
    Directive::flag("must-understand", "must_understand"),
    NO_CACHE_DIRECTIVE,
    NO_STORE_DIRECTIVE,
    NO_TRANSFORM_DIRECTIVE,
    Directive::flag("private", "private"),
    Directive::flag("proxy-revalidate", "proxy_revalidate"),
    Directive::flag("public", "public"),
    Directive::seconds("s-maxage", "s_maxage"),
    STALE_IF_ERROR_DIRECTIVE,
    Directive::seconds("stale-while-revalidate", "stale_while_revalidate"),
    Directive::flag("immutable", "immutable"),
];

/// The response-side `Cache-Control` definition.
pub static RESPONSE: HeaderDef =
    HeaderDef::new("cache-control", ",", &RESPONSE_DIRECTIVES).with_transform(collapse_no_store);

static REQUEST_DIRECTIVES: [Directive; 8] = [
    MAX_AGE_DIRECTIVE,
    Directive::seconds("max-stale", "max_stale"),
    Directive::seconds("min-fresh", "min_fresh"),
    NO_CACHE_DIRECTIVE,
    NO_STORE_DIRECTIVE,
    NO_TRANSFORM_DIRECTIVE,
    Directive::flag("only-if-cached", "only_if_cached"),
    STALE_IF_ERROR_DIRECTIVE,
];

/// The request-side `Cache-Control` definition.
pub static REQUEST: HeaderDef =
    HeaderDef::new("cache-control", ",", &REQUEST_DIRECTIVES).with_transform(collapse_no_store);

// Operation keys. The shared ones work on either variant.
pub const MAX_AGE: SecondsKey = SecondsKey::new("max_age");
pub const NO_CACHE: FlagKey = FlagKey::new("no_cache");
pub const NO_STORE: FlagKey = FlagKey::new("no_store");
pub const NO_TRANSFORM: FlagKey = FlagKey::new("no_transform");
pub const STALE_IF_ERROR: SecondsKey = SecondsKey::new("stale_if_error");

// Response-only keys.
pub const MUST_REVALIDATE: FlagKey = FlagKey::new("must_revalidate");
pub const MUST_UNDERSTAND: FlagKey = FlagKey::new("must_understand");
pub const PRIVATE: FlagKey = FlagKey::new("private");
pub const PROXY_REVALIDATE: FlagKey = FlagKey::new("proxy_revalidate");
pub const PUBLIC: FlagKey = FlagKey::new("public");
pub const S_MAXAGE: SecondsKey = SecondsKey::new("s_maxage");
pub const STALE_WHILE_REVALIDATE: SecondsKey = SecondsKey::new("stale_while_revalidate");
pub const IMMUTABLE: FlagKey = FlagKey::new("immutable");

// Request-only keys.
pub const MAX_STALE: SecondsKey = SecondsKey::new("max_stale");
pub const MIN_FRESH: SecondsKey = SecondsKey::new("min_fresh");
pub const ONLY_IF_CACHED: FlagKey = FlagKey::new("only_if_cached");

#[cfg(test)]
mod tests {
    use super::*;
    use header_directives::duration::Duration;

    #[test]
    fn no_store_collapses_everything() {
        let header = RESPONSE.builder().flag(NO_STORE, true).seconds(MAX_AGE, 100).build().unwrap();
        assert_eq!(header.to_value_string(), "no-store");
        assert_eq!(header.get("max_age"), None);

        let header = REQUEST.builder().flag(NO_STORE, true).flag(NO_CACHE, true).build().unwrap();
        assert_eq!(header.to_value_string(), "no-store");
    }

    #[test]
    fn setting_no_store_later_also_collapses() {
        let header = RESPONSE.builder().seconds(MAX_AGE, 100).build().unwrap();
        let header = NO_STORE.set(&header, true).unwrap();
        assert_eq!(header.to_value_string(), "no-store");
    }

    #[test]
    fn response_serialization_order_is_pinned() {
        let header = RESPONSE
            .builder()
            .flag(IMMUTABLE, true)
            .seconds(STALE_WHILE_REVALIDATE, 4)
            .seconds(STALE_IF_ERROR, 3)
            .seconds(S_MAXAGE, 2)
            .flag(PUBLIC, true)
            .flag(PROXY_REVALIDATE, true)
            .flag(PRIVATE, true)
            .flag(NO_TRANSFORM, true)
            .flag(NO_CACHE, true)
            .flag(MUST_UNDERSTAND, true)
            .flag(MUST_REVALIDATE, true)
            .seconds(MAX_AGE, 1)
            .build()
            .unwrap();

        assert_eq!(
            header.to_value_string(),
            "max-age=1,must-revalidate,must-understand,no-cache,no-transform,private,\
             proxy-revalidate,public,s-maxage=2,stale-if-error=3,stale-while-revalidate=4,immutable"
        );
    }

    #[test]
    fn request_serialization_order_is_pinned() {
        let header = REQUEST
            .builder()
            .seconds(STALE_IF_ERROR, 5)
            .flag(ONLY_IF_CACHED, true)
            .flag(NO_TRANSFORM, true)
            .flag(NO_CACHE, true)
            .seconds(MIN_FRESH, 3)
            .seconds(MAX_STALE, 2)
            .seconds(MAX_AGE, 1)
            .build()
            .unwrap();

        assert_eq!(
            header.to_value_string(),
            "max-age=1,max-stale=2,min-fresh=3,no-cache,no-transform,only-if-cached,stale-if-error=5"
        );
    }

    #[test]
    fn shared_keys_work_on_both_variants() {
        let response = RESPONSE.builder().seconds(MAX_AGE, 100).build().unwrap();
        let request = REQUEST.builder().seconds(MAX_AGE, 100).build().unwrap();

        assert_eq!(MAX_AGE.get(&MAX_AGE.with_min(&response, 200).unwrap()), Some(200));
        assert_eq!(MAX_AGE.get(&MAX_AGE.with_min(&request, 200).unwrap()), Some(200));
    }

    #[test]
    fn duration_inputs_accept_units() {
        let header = RESPONSE.builder().seconds(MAX_AGE, Duration::Days(1)).build().unwrap();
        assert_eq!(header.to_value_string(), "max-age=86400");
    }

    #[test]
    fn parse_reconstructs_the_map() {
        let parsed = REQUEST.parse("max-age=100, no-cache").unwrap();
        let built = REQUEST.builder().seconds(MAX_AGE, 100).flag(NO_CACHE, true).build().unwrap();
        assert_eq!(parsed, built);
    }

    #[test]
    fn parse_applies_the_no_store_collapse() {
        let parsed = RESPONSE.parse("max-age=100, no-cache, no-store").unwrap();
        assert_eq!(parsed.to_value_string(), "no-store");
    }

    #[test]
    fn normalize_produces_canonical_text() {
        assert_eq!(RESPONSE.normalize("max-age=100").unwrap(), "max-age=100");
        assert_eq!(RESPONSE.normalize("no-cache, max-age=100").unwrap(), "max-age=100,no-cache");
        assert_eq!(RESPONSE.normalize("max-age=100, no-cache, no-store").unwrap(), "no-store");
        assert_eq!(
            RESPONSE.normalize("Cache-Control: no-cache, max-age=100").unwrap(),
            "cache-control: max-age=100,no-cache"
        );
    }

    #[test]
    fn validate_flags_duplicates_and_unknowns() {
        assert!(REQUEST.validate("max-age=100"));
        assert!(REQUEST.validate("max-age=100, no-cache"));
        assert!(REQUEST.validate("max-age=100, no-cache, no-store"));
        assert!(!REQUEST.validate("max-age=100, no-cache, no-store, max-age=100"));
        assert!(!REQUEST.validate("max-age=100, only-if-understood"));
        // response-only directives are unknown to the request variant
        assert!(!REQUEST.validate("s-maxage=100"));
        assert!(RESPONSE.validate("s-maxage=100"));
    }

    #[test]
    fn round_trip_via_normalize_is_stable() {
        let raw = "Cache-Control: public, max-age=600, stale-while-revalidate=30";
        let once = RESPONSE.normalize(raw).unwrap();
        assert_eq!(once, "cache-control: max-age=600,public,stale-while-revalidate=30");
        assert_eq!(RESPONSE.normalize(&once).unwrap(), once);
    }
}
