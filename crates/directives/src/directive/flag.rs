//! Boolean flag directives.
//!
//! A flag is present-and-true, present-and-false, or absent. Only
//! present-and-true serializes: the wire fragment is the bare name token
//! (`no-cache`), or the token `true` for literal flags such as
//! `Access-Control-Allow-Credentials`.

use crate::error::{BuildError, ParseError};
use crate::header::Header;

use super::DirectiveValue;

pub(super) fn stringify(name: &str, literal: bool, set: bool) -> Option<String> {
    if !set {
        return None;
    }
    if literal { Some("true".to_owned()) } else { Some(name.to_owned()) }
}

pub(super) fn parse(literal: bool, segment: &str) -> Result<DirectiveValue, ParseError> {
    if !literal {
        // the scanner only hands over exact name matches
        return Ok(DirectiveValue::Flag(true));
    }
    match segment {
        "true" => Ok(DirectiveValue::Flag(true)),
        "false" => Ok(DirectiveValue::Flag(false)),
        other => Err(ParseError::invalid_keyword(other)),
    }
}

/// Typed operation carrier for a boolean directive key.
///
/// A `FlagKey` is shared by every header that stores the same key as a
/// boolean; `no-cache` operations work identically on the request and
/// response Cache-Control variants.
///
/// For the algebraic operations an absent flag reads as `false`, so
/// `negate` of an absent flag yields `true`.
#[derive(Debug, Clone, Copy)]
pub struct FlagKey {
    key: &'static str,
}

impl FlagKey {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(self) -> &'static str {
        self.key
    }

    /// The current value, with absent reading as `false`.
    pub fn get(self, header: &Header) -> bool {
        matches!(header.get(self.key), Some(DirectiveValue::Flag(true)))
    }

    pub fn set(self, header: &Header, value: bool) -> Result<Header, BuildError> {
        header.with(self.key, DirectiveValue::Flag(value))
    }

    /// Removes the flag from the header entirely.
    pub fn unset(self, header: &Header) -> Result<Header, BuildError> {
        header.without(self.key)
    }

    /// Flips the flag, treating absent as `false` (absent → `true`).
    pub fn negate(self, header: &Header) -> Result<Header, BuildError> {
        self.set(header, !self.get(header))
    }

    pub fn or(self, header: &Header, value: bool) -> Result<Header, BuildError> {
        self.set(header, self.get(header) || value)
    }

    pub fn and(self, header: &Header, value: bool) -> Result<Header, BuildError> {
        self.set(header, self.get(header) && value)
    }

    pub fn xor(self, header: &Header, value: bool) -> Result<Header, BuildError> {
        self.set(header, self.get(header) != value)
    }

    pub fn set_fn(self, value: bool) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.set(&header, value)
    }

    pub fn unset_fn(self) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.unset(&header)
    }

    pub fn negate_fn(self) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.negate(&header)
    }

    pub fn or_fn(self, value: bool) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.or(&header, value)
    }

    pub fn and_fn(self, value: bool) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.and(&header, value)
    }

    pub fn xor_fn(self, value: bool) -> impl Fn(Header) -> Result<Header, BuildError> {
        move |header| self.xor(&header, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Directive;
    use crate::header::HeaderDef;

    static DIRECTIVES: [Directive; 2] = [Directive::flag("alpha", "alpha"), Directive::flag("beta", "beta")];
    static TEST: HeaderDef = HeaderDef::new("x-test", ", ", &DIRECTIVES);

    const ALPHA: FlagKey = FlagKey::new("alpha");

    #[test]
    fn set_and_get() {
        let header = TEST.empty().unwrap();
        assert!(!ALPHA.get(&header));

        let header = ALPHA.set(&header, true).unwrap();
        assert!(ALPHA.get(&header));
        assert_eq!(header.to_value_string(), "alpha");
    }

    #[test]
    fn negate_treats_absent_as_false() {
        let header = TEST.empty().unwrap();
        let negated = ALPHA.negate(&header).unwrap();
        assert!(ALPHA.get(&negated));

        // absent → true → false, not back to absent
        let twice = ALPHA.negate(&negated).unwrap();
        assert!(!ALPHA.get(&twice));
        assert!(twice.get("alpha").is_some());
    }

    #[test]
    fn boolean_identities() {
        let header = TEST.empty().unwrap();
        assert!(ALPHA.get(&ALPHA.or(&header, true).unwrap()));
        assert!(!ALPHA.get(&ALPHA.or(&header, false).unwrap()));
        assert!(!ALPHA.get(&ALPHA.and(&header, true).unwrap()));
        assert!(ALPHA.get(&ALPHA.xor(&header, true).unwrap()));

        let set = ALPHA.set(&header, true).unwrap();
        assert!(ALPHA.get(&ALPHA.and(&set, true).unwrap()));
        assert!(!ALPHA.get(&ALPHA.xor(&set, true).unwrap()));
    }

    #[test]
    fn curried_forms_compose() {
        let header = TEST.empty().unwrap();
        let header = header.pipe(ALPHA.set_fn(true)).unwrap().pipe(ALPHA.xor_fn(true)).unwrap();
        assert!(!ALPHA.get(&header));
    }

    #[test]
    fn false_is_present_but_silent() {
        let header = TEST.empty().unwrap();
        let header = ALPHA.set(&header, false).unwrap();
        assert_eq!(header.get("alpha"), Some(&DirectiveValue::Flag(false)));
        assert_eq!(header.to_value_string(), "");
    }

    #[test]
    fn literal_flag_parses_true_and_false() {
        assert_eq!(parse(true, "true").unwrap(), DirectiveValue::Flag(true));
        assert_eq!(parse(true, "false").unwrap(), DirectiveValue::Flag(false));
        assert!(parse(true, "yes").is_err());
    }
}
