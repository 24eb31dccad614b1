//! Directive descriptors: the named, independently validated units of header
//! state.
//!
//! A [`Directive`] couples a wire token (`max-age`), a storage key
//! (`max_age`) and a [`DirectiveKind`] that defines how candidate values are
//! validated, how stored values are serialized to a string fragment, and how
//! fragments parse back. Descriptors are plain const data — predicates and
//! hooks are `fn` pointers — so a header's directive table can live in a
//! `static` array and be shared process-wide.
//!
//! # Kinds
//!
//! - [`DirectiveKind::Flag`]: boolean, serialized as the bare name token
//!   (or the token `true` in literal mode).
//! - [`DirectiveKind::Seconds`]: a duration in canonical integer seconds,
//!   serialized as `name=seconds` (or just the number in literal mode).
//! - [`DirectiveKind::Token`]: a keyword or free-form string, serialized as
//!   `name<separator>value` (or the bare value in literal mode).
//! - [`DirectiveKind::List`]: an ordered-for-output set of strings with
//!   optional collapse and ordering hooks.
//!
//! A *literal* directive omits its name on the wire entirely; such
//! directives are the sole content of single-directive headers like
//! `Cross-Origin-Opener-Policy`.
//!
//! The per-kind algebraic operations live on the typed key carriers
//! ([`FlagKey`], [`SecondsKey`], [`TokenKey`], [`ListKey`]), which are
//! shared between any headers that store the same key with the same value
//! type.

mod flag;
mod list;
mod seconds;
mod token;

pub use flag::FlagKey;
pub use list::{ListKey, ListSpec};
pub use seconds::SecondsKey;
pub use token::{TokenKey, TokenSpec};

use crate::error::{BuildError, ParseError};
use crate::utils::{ensure, strip_prefix_ignore_case};

/// A stored directive value: one of the four storable shapes.
///
/// Absence from the header map is a distinct state; `Flag(false)` and an
/// empty list are *present* values that happen to serialize to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    Flag(bool),
    Seconds(i64),
    Token(String),
    List(Vec<String>),
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for DirectiveValue {
    fn from(seconds: i64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        Self::Token(value.to_owned())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<Vec<String>> for DirectiveValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// The behavior of a directive: validation, serialization and parsing rules.
#[derive(Debug, Clone, Copy)]
pub enum DirectiveKind {
    Flag { literal: bool },
    Seconds { literal: bool },
    Token(TokenSpec),
    List(ListSpec),
}

impl DirectiveKind {
    const fn expected(&self) -> &'static str {
        match self {
            Self::Flag { .. } => "a boolean",
            Self::Seconds { .. } => "a non-negative duration in seconds",
            Self::Token(_) => "an accepted string token",
            Self::List(_) => "a list of accepted elements",
        }
    }
}

/// An immutable directive descriptor.
///
/// `name` is the wire token, `key` the storage/access key; they differ for
/// literal directives, whose name never appears on the wire.
#[derive(Debug, Clone, Copy)]
pub struct Directive {
    name: &'static str,
    key: &'static str,
    kind: DirectiveKind,
}

impl Directive {
    /// A boolean directive serialized as the bare name token.
    pub const fn flag(name: &'static str, key: &'static str) -> Self {
        Self { name, key, kind: DirectiveKind::Flag { literal: false } }
    }

    /// A boolean directive serialized as the token `true` with no name.
    pub const fn literal_flag(name: &'static str, key: &'static str) -> Self {
        Self { name, key, kind: DirectiveKind::Flag { literal: true } }
    }

    /// A duration directive serialized as `name=seconds`.
    pub const fn seconds(name: &'static str, key: &'static str) -> Self {
        Self { name, key, kind: DirectiveKind::Seconds { literal: false } }
    }

    /// A duration directive serialized as the bare number of seconds.
    pub const fn literal_seconds(name: &'static str, key: &'static str) -> Self {
        Self { name, key, kind: DirectiveKind::Seconds { literal: true } }
    }

    /// A keyword or string directive, configured by its [`TokenSpec`].
    pub const fn token(name: &'static str, key: &'static str, spec: TokenSpec) -> Self {
        Self { name, key, kind: DirectiveKind::Token(spec) }
    }

    /// A list directive, configured by its [`ListSpec`].
    pub const fn list(name: &'static str, key: &'static str, spec: ListSpec) -> Self {
        Self { name, key, kind: DirectiveKind::List(spec) }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Checks a candidate value against this directive's shape and
    /// predicates. Construction of a header value calls this for every
    /// supplied entry.
    pub fn validate(&self, value: &DirectiveValue) -> Result<(), BuildError> {
        match (&self.kind, value) {
            (DirectiveKind::Flag { .. }, DirectiveValue::Flag(_)) => Ok(()),
            (DirectiveKind::Seconds { .. }, DirectiveValue::Seconds(n)) => {
                ensure!(*n >= 0, BuildError::invalid_value(self.key, self.kind.expected()));
                Ok(())
            }
            (DirectiveKind::Token(spec), DirectiveValue::Token(v)) => {
                ensure!((spec.accept)(v), BuildError::invalid_value(self.key, self.kind.expected()));
                Ok(())
            }
            (DirectiveKind::List(spec), DirectiveValue::List(vs)) => {
                ensure!(
                    vs.iter().all(|v| (spec.accept)(v)),
                    BuildError::invalid_value(self.key, self.kind.expected())
                );
                Ok(())
            }
            _ => Err(BuildError::invalid_value(self.key, self.kind.expected())),
        }
    }

    /// Rewrites a validated value into canonical stored form. Lists are
    /// deduplicated (first occurrence wins) and sorted; other kinds are
    /// already canonical.
    pub fn canonicalize(&self, value: DirectiveValue) -> DirectiveValue {
        match (&self.kind, value) {
            (DirectiveKind::List(spec), DirectiveValue::List(values)) => {
                DirectiveValue::List(list::canonicalize(spec, values))
            }
            (_, value) => value,
        }
    }

    /// Serializes a stored value to its wire fragment. `None` means the
    /// directive is omitted from the output entirely.
    pub fn stringify(&self, value: &DirectiveValue) -> Option<String> {
        match (&self.kind, value) {
            (DirectiveKind::Flag { literal }, DirectiveValue::Flag(set)) => flag::stringify(self.name, *literal, *set),
            (DirectiveKind::Seconds { literal }, DirectiveValue::Seconds(n)) => {
                Some(seconds::stringify(self.name, *literal, *n))
            }
            (DirectiveKind::Token(spec), DirectiveValue::Token(v)) => token::stringify(self.name, spec, v),
            (DirectiveKind::List(spec), DirectiveValue::List(vs)) => list::stringify(self.name, spec, vs),
            // shape mismatches are rejected at construction time
            _ => None,
        }
    }

    /// Whether a scanned segment belongs to this directive.
    ///
    /// Non-literal directives match on their name token followed by a hard
    /// boundary (end of segment, `=`, or the kind's name/value separator),
    /// which disambiguates prefix-sharing names like `script-src` and
    /// `script-src-elem` together with longest-name-wins selection in the
    /// scanner. Literal directives carry no name on the wire and instead
    /// claim any segment their own parser accepts.
    pub fn matches(&self, segment: &str) -> bool {
        match &self.kind {
            DirectiveKind::Flag { literal: false } => segment.eq_ignore_ascii_case(self.name),
            DirectiveKind::Seconds { literal: false } => name_with_boundary(segment, self.name, "="),
            DirectiveKind::Token(spec) if !spec.literal => name_with_boundary(segment, self.name, spec.separator),
            DirectiveKind::List(spec) if !spec.literal => name_with_boundary(segment, self.name, spec.separator),
            _ => self.parse_segment(segment).is_ok(),
        }
    }

    /// Parses a matched segment back to a value. The segment is expected to
    /// be trimmed and case-folded by the scanner.
    pub fn parse_segment(&self, segment: &str) -> Result<DirectiveValue, ParseError> {
        match &self.kind {
            DirectiveKind::Flag { literal } => flag::parse(*literal, segment),
            DirectiveKind::Seconds { literal } => seconds::parse(self.name, *literal, segment),
            DirectiveKind::Token(spec) => token::parse(self.name, spec, segment),
            DirectiveKind::List(spec) => list::parse(self.name, spec, segment),
        }
    }

    /// The strict-scan error for a recognized segment whose value is bad.
    pub(crate) fn invalid_segment(&self, segment: &str) -> ParseError {
        match self.kind {
            DirectiveKind::Seconds { .. } => ParseError::invalid_duration(segment),
            _ => ParseError::invalid_keyword(segment),
        }
    }
}

fn name_with_boundary(segment: &str, name: &str, boundary: &str) -> bool {
    match strip_prefix_ignore_case(segment, name) {
        None => false,
        Some("") => true,
        Some(rest) => rest.starts_with(boundary),
    }
}
