//! The `X-Content-Type-Options` header: a single `nosniff` flag.

use header_directives::directive::{Directive, FlagKey};
use header_directives::header::HeaderDef;

static DIRECTIVES: [Directive; 1] = [Directive::flag("nosniff", "nosniff")];

/// The `X-Content-Type-Options` definition.
pub static X_CONTENT_TYPE_OPTIONS: HeaderDef =
    HeaderDef::new("x-content-type-options", "; ", &DIRECTIVES);

pub const NOSNIFF: FlagKey = FlagKey::new("nosniff");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nosniff_round_trips() {
        let header = X_CONTENT_TYPE_OPTIONS.builder().flag(NOSNIFF, true).build().unwrap();
        assert_eq!(header.to_header_string(), "x-content-type-options: nosniff");

        assert_eq!(X_CONTENT_TYPE_OPTIONS.parse("nosniff").unwrap(), header);
        assert_eq!(X_CONTENT_TYPE_OPTIONS.parse("X-Content-Type-Options: NoSniff").unwrap(), header);
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(!X_CONTENT_TYPE_OPTIONS.validate("sniff"));
        assert!(X_CONTENT_TYPE_OPTIONS.validate("nosniff"));

        let header = X_CONTENT_TYPE_OPTIONS.parse("sniff").unwrap();
        assert!(header.is_empty());
    }
}
