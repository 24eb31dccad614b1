//! Header definitions and immutable header values.
//!
//! A [`HeaderDef`] is the static description of one HTTP header: its name,
//! its fragment separator, its ordered directive table, and an optional
//! transform applied to every constructed directive map. Definitions are
//! built once (usually in `static`s) and treated as process-wide read-only
//! configuration.
//!
//! A [`Header`] is an immutable value of such a definition: a partial map
//! from directive key to stored value. Every update ([`Header::with`],
//! [`Header::without`], the typed key operations) produces a new instance;
//! serialization walks the definition's directive table in declared order
//! and is memoized per instance.
//!
//! # Construction
//!
//! ```
//! use header_directives::directive::{Directive, FlagKey, SecondsKey};
//! use header_directives::header::HeaderDef;
//!
//! static DIRECTIVES: [Directive; 2] =
//!     [Directive::seconds("max-age", "max_age"), Directive::flag("no-cache", "no_cache")];
//! static EXAMPLE: HeaderDef = HeaderDef::new("x-example", ",", &DIRECTIVES);
//!
//! const MAX_AGE: SecondsKey = SecondsKey::new("max_age");
//! const NO_CACHE: FlagKey = FlagKey::new("no_cache");
//!
//! let header = EXAMPLE.builder().seconds(MAX_AGE, 300).flag(NO_CACHE, true).build().unwrap();
//! assert_eq!(header.to_value_string(), "max-age=300,no-cache");
//! ```

mod parse;

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::OnceCell;

use crate::directive::{Directive, DirectiveValue, FlagKey, ListKey, SecondsKey, TokenKey};
use crate::duration::Duration;
use crate::error::BuildError;

/// The partial directive-key → value map backing a header value.
pub type DirectiveMap = BTreeMap<&'static str, DirectiveValue>;

/// A header-level rewrite applied to every constructed directive map.
///
/// Transforms implement cross-directive precedence (Cache-Control's
/// `no-store` collapsing the whole map) and mandatory-directive checks
/// (Strict-Transport-Security rejecting maps without `max-age`).
pub type Transform = fn(DirectiveMap) -> Result<DirectiveMap, BuildError>;

/// The static definition of one HTTP header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderDef {
    pub(crate) name: &'static str,
    pub(crate) separator: &'static str,
    pub(crate) directives: &'static [Directive],
    pub(crate) transform: Option<Transform>,
}

impl HeaderDef {
    pub const fn new(name: &'static str, separator: &'static str, directives: &'static [Directive]) -> Self {
        Self { name, separator, directives, transform: None }
    }

    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up a directive by storage key.
    pub fn directive(&self, key: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.key() == key)
    }

    /// Starts a typed builder for a value of this header.
    pub fn builder(&'static self) -> HeaderBuilder {
        HeaderBuilder { def: self, values: DirectiveMap::new(), error: None }
    }

    /// Builds the header with no directives set. Fails for definitions
    /// whose transform requires a directive.
    pub fn empty(&'static self) -> Result<Header, BuildError> {
        self.from_map(DirectiveMap::new())
    }

    /// Validates and canonicalizes every entry, applies the transform, and
    /// wraps the result. This is the single construction path shared by the
    /// builder, the update operations and the parser.
    pub(crate) fn from_map(&'static self, raw: DirectiveMap) -> Result<Header, BuildError> {
        let mut values = DirectiveMap::new();
        for (key, value) in raw {
            let directive = self.directive(key).ok_or_else(|| BuildError::unknown_key(key))?;
            directive.validate(&value)?;
            values.insert(directive.key(), directive.canonicalize(value));
        }

        let values = match self.transform {
            Some(transform) => transform(values)?,
            None => values,
        };

        Ok(Header { def: self, values, rendered: OnceCell::new() })
    }
}

/// Accumulates typed directive entries for one header value.
///
/// Invalid entries are latched and reported by [`HeaderBuilder::build`];
/// the first error wins.
#[derive(Debug)]
pub struct HeaderBuilder {
    def: &'static HeaderDef,
    values: DirectiveMap,
    error: Option<BuildError>,
}

impl HeaderBuilder {
    fn insert(&mut self, key: &'static str, value: DirectiveValue) {
        self.values.insert(key, value);
    }

    fn fail(&mut self, error: BuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn flag(mut self, key: FlagKey, value: bool) -> Self {
        self.insert(key.key(), DirectiveValue::Flag(value));
        self
    }

    pub fn seconds(mut self, key: SecondsKey, value: impl Into<Duration>) -> Self {
        match value.into().to_seconds(false) {
            Ok(seconds) => self.insert(key.key(), DirectiveValue::Seconds(seconds)),
            Err(error) => self.fail(error.into()),
        }
        self
    }

    pub fn token(mut self, key: TokenKey, value: impl Into<String>) -> Self {
        self.insert(key.key(), DirectiveValue::Token(value.into()));
        self
    }

    pub fn list<I, S>(mut self, key: ListKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key.key(), DirectiveValue::List(values.into_iter().map(Into::into).collect()));
        self
    }

    /// Untyped escape hatch for dynamic construction.
    pub fn value(mut self, key: &'static str, value: DirectiveValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn build(self) -> Result<Header, BuildError> {
        match self.error {
            Some(error) => Err(error),
            None => self.def.from_map(self.values),
        }
    }
}

/// An immutable HTTP header value.
///
/// Equality compares the definition (by identity) and the directive map;
/// the memoized rendering is ignored.
#[derive(Clone)]
pub struct Header {
    def: &'static HeaderDef,
    values: DirectiveMap,
    rendered: OnceCell<String>,
}

impl Header {
    /// The definition this value belongs to. Definition identity doubles as
    /// the runtime discriminant between header types.
    pub fn definition(&self) -> &'static HeaderDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// The stored value for a directive key, if set.
    pub fn get(&self, key: &str) -> Option<&DirectiveValue> {
        self.values.get(key)
    }

    /// Whether any directive is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn directives(&self) -> &DirectiveMap {
        &self.values
    }

    /// Returns a new header with `key` set to `value`. The value is
    /// validated against the directive and the definition's transform is
    /// re-applied.
    pub fn with(&self, key: &str, value: impl Into<DirectiveValue>) -> Result<Self, BuildError> {
        let directive = self.def.directive(key).ok_or_else(|| BuildError::unknown_key(key))?;
        let mut values = self.values.clone();
        values.insert(directive.key(), value.into());
        self.def.from_map(values)
    }

    /// Returns a new header with `key` removed entirely — a real deletion,
    /// distinct from setting a false/empty value.
    pub fn without(&self, key: &str) -> Result<Self, BuildError> {
        let directive = self.def.directive(key).ok_or_else(|| BuildError::unknown_key(key))?;
        let mut values = self.values.clone();
        values.remove(directive.key());
        self.def.from_map(values)
    }

    /// Feeds this header through a function; the pipeable counterpart of
    /// the direct operation forms.
    pub fn pipe<T>(self, f: impl FnOnce(Self) -> T) -> T {
        f(self)
    }

    /// The canonical value string: directives in declared order, absent and
    /// false values skipped, fragments joined by the definition separator.
    /// Computed once per instance.
    pub fn to_value_string(&self) -> &str {
        self.rendered.get_or_init(|| {
            let mut fragments: Vec<String> = Vec::new();
            for directive in self.def.directives {
                match self.values.get(directive.key()) {
                    None | Some(DirectiveValue::Flag(false)) => {}
                    Some(value) => {
                        if let Some(fragment) = directive.stringify(value) {
                            fragments.push(fragment);
                        }
                    }
                }
            }
            fragments.join(self.def.separator)
        })
    }

    /// The full `name: value` form.
    pub fn to_header_string(&self) -> String {
        format!("{}: {}", self.def.name, self.to_value_string())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_value_string())
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header").field("name", &self.def.name).field("directives", &self.values).finish()
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.values == other.values
    }
}

impl Eq for Header {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::ListSpec;

    fn is_token(value: &str) -> bool {
        !value.is_empty() && !value.chars().any(char::is_whitespace)
    }

    static DIRECTIVES: [Directive; 3] = [
        Directive::seconds("max-age", "max_age"),
        Directive::flag("no-cache", "no_cache"),
        Directive::list("tags", "tags", ListSpec::new(is_token).separated_by(" ")),
    ];
    static EXAMPLE: HeaderDef = HeaderDef::new("x-example", ",", &DIRECTIVES);

    const MAX_AGE: SecondsKey = SecondsKey::new("max_age");
    const NO_CACHE: FlagKey = FlagKey::new("no_cache");
    const TAGS: ListKey = ListKey::new("tags");

    fn require_max_age(values: DirectiveMap) -> Result<DirectiveMap, BuildError> {
        if !values.contains_key("max_age") {
            return Err(BuildError::missing("max-age"));
        }
        Ok(values)
    }

    static STRICT_DIRECTIVES: [Directive; 1] = [Directive::seconds("max-age", "max_age")];
    static STRICT: HeaderDef =
        HeaderDef::new("x-strict", ",", &STRICT_DIRECTIVES).with_transform(require_max_age);

    #[test]
    fn serialization_follows_declared_order() {
        // insertion order is max_age last; output order comes from the table
        let header =
            EXAMPLE.builder().list(TAGS, ["b", "a"]).flag(NO_CACHE, true).seconds(MAX_AGE, 60).build().unwrap();
        assert_eq!(header.to_value_string(), "max-age=60,no-cache,tags a b");
        assert_eq!(header.to_header_string(), "x-example: max-age=60,no-cache,tags a b");
    }

    #[test]
    fn construction_validates_every_entry() {
        let err = EXAMPLE.builder().seconds(MAX_AGE, -5).build().unwrap_err();
        assert!(matches!(err, BuildError::Duration { .. }));

        let err = EXAMPLE.builder().list(TAGS, ["ok", "not ok"]).build().unwrap_err();
        assert_eq!(err, BuildError::invalid_value("tags", "a list of accepted elements"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let header = EXAMPLE.empty().unwrap();
        assert_eq!(header.with("bogus", true).unwrap_err(), BuildError::unknown_key("bogus"));
    }

    #[test]
    fn with_and_without_are_immutable() {
        let original = EXAMPLE.builder().seconds(MAX_AGE, 60).build().unwrap();
        let updated = original.with("no_cache", true).unwrap();

        assert_eq!(original.to_value_string(), "max-age=60");
        assert_eq!(updated.to_value_string(), "max-age=60,no-cache");

        let removed = updated.without("max_age").unwrap();
        assert_eq!(removed.to_value_string(), "no-cache");
        assert_eq!(updated.to_value_string(), "max-age=60,no-cache");
    }

    #[test]
    fn removal_is_distinct_from_false() {
        let set_false = EXAMPLE.empty().unwrap().with("no_cache", false).unwrap();
        let removed = set_false.without("no_cache").unwrap();

        assert_eq!(set_false.to_value_string(), removed.to_value_string());
        assert_ne!(set_false, removed);
    }

    #[test]
    fn equal_maps_serialize_identically() {
        let a = EXAMPLE.builder().flag(NO_CACHE, true).seconds(MAX_AGE, 60).build().unwrap();
        let b = EXAMPLE.builder().seconds(MAX_AGE, 60).flag(NO_CACHE, true).build().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_value_string(), b.to_value_string());
    }

    #[test]
    fn transform_enforces_mandatory_directives() {
        assert_eq!(STRICT.empty().unwrap_err(), BuildError::missing("max-age"));

        let header = STRICT.builder().seconds(SecondsKey::new("max_age"), 10).build().unwrap();
        assert_eq!(header.without("max_age").unwrap_err(), BuildError::missing("max-age"));
    }

    #[test]
    fn rendering_is_memoized_per_instance() {
        let header = EXAMPLE.builder().seconds(MAX_AGE, 60).build().unwrap();
        let first = header.to_value_string() as *const str;
        let second = header.to_value_string() as *const str;
        assert_eq!(first, second);
    }
}
