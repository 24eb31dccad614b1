//! Error types for header construction and strict parsing.
//!
//! The two enums mirror the two failure paths of the library:
//!
//! - [`BuildError`]: construction-time failures. These are fatal to the
//!   header being built; there is no partially-constructed header value.
//! - [`ParseError`]: strict-scan failures. They are raised internally by the
//!   strict scanner and converted to `false` by `validate`; lenient parsing
//!   never surfaces them.

use thiserror::Error;

use crate::duration::DurationError;

/// Errors raised while constructing or updating a header value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid value for directive {key:?}: expected {expected}")]
    InvalidDirectiveValue { key: &'static str, expected: &'static str },

    #[error("unknown directive key: {key}")]
    UnknownKey { key: String },

    #[error("missing required directive: {name}")]
    MissingDirective { name: &'static str },

    #[error("duration error: {source}")]
    Duration {
        #[from]
        source: DurationError,
    },
}

impl BuildError {
    pub fn invalid_value(key: &'static str, expected: &'static str) -> Self {
        Self::InvalidDirectiveValue { key, expected }
    }

    pub fn unknown_key<S: ToString>(key: S) -> Self {
        Self::UnknownKey { key: key.to_string() }
    }

    pub fn missing(name: &'static str) -> Self {
        Self::MissingDirective { name }
    }
}

/// Errors raised by the strict segment scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown directive: {segment}")]
    UnknownDirective { segment: String },

    #[error("duplicate directive: {key}")]
    DuplicateDirective { key: &'static str },

    #[error("empty directive")]
    EmptyDirective,

    #[error("invalid duration: {segment}")]
    InvalidDuration { segment: String },

    #[error("invalid keyword: {segment}")]
    InvalidKeyword { segment: String },
}

impl ParseError {
    pub fn unknown_directive<S: ToString>(segment: S) -> Self {
        Self::UnknownDirective { segment: segment.to_string() }
    }

    pub fn duplicate_directive(key: &'static str) -> Self {
        Self::DuplicateDirective { key }
    }

    pub fn invalid_duration<S: ToString>(segment: S) -> Self {
        Self::InvalidDuration { segment: segment.to_string() }
    }

    pub fn invalid_keyword<S: ToString>(segment: S) -> Self {
        Self::InvalidKeyword { segment: segment.to_string() }
    }
}
