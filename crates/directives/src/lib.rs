//! A composable framework for building, validating, parsing and
//! normalizing HTTP header values.
//!
//! Many HTTP headers share one shape: an ordered set of named *directives*,
//! each a boolean flag (`no-cache`), a duration (`max-age=300`), a keyword
//! (`same-origin`), or a list (`script-src 'self' example.com`). This crate
//! provides the generic mechanism that turns a static table of directive
//! descriptors into a typed, immutable header value with validation,
//! canonical serialization and strict/lenient parsing. The concrete
//! standard headers built on top of it live in the companion
//! `header-catalog` crate.
//!
//! # Example
//!
//! ```
//! use header_directives::directive::{Directive, FlagKey, SecondsKey};
//! use header_directives::header::HeaderDef;
//!
//! // One static table describes the header.
//! static DIRECTIVES: [Directive; 2] =
//!     [Directive::seconds("max-age", "max_age"), Directive::flag("no-cache", "no_cache")];
//! static CACHING: HeaderDef = HeaderDef::new("x-caching", ",", &DIRECTIVES);
//!
//! const MAX_AGE: SecondsKey = SecondsKey::new("max_age");
//! const NO_CACHE: FlagKey = FlagKey::new("no_cache");
//!
//! // Build a value; every mutation returns a new immutable instance.
//! let header = CACHING.builder().seconds(MAX_AGE, 300).build().unwrap();
//! let header = NO_CACHE.set(&header, true).unwrap();
//! assert_eq!(header.to_value_string(), "max-age=300,no-cache");
//!
//! // Parsing is the serialization's left inverse up to normalization.
//! let parsed = CACHING.parse("No-Cache, Max-Age=300").unwrap();
//! assert_eq!(parsed, header);
//! assert!(!CACHING.validate("max-age=300, max-age=300"));
//! ```
//!
//! # Architecture
//!
//! - [`directive`]: directive descriptors — the four kinds (flag, seconds,
//!   token, list), their validation/serialization/parsing rules, and the
//!   typed operation keys carrying the per-kind algebra (clamp, negate,
//!   include/exclude, ...).
//! - [`duration`]: unit-tagged duration inputs, collapsed to canonical
//!   integer seconds at the header boundary.
//! - [`header`]: header definitions, the builder, the immutable value
//!   object, and the lenient/strict scanner behind
//!   `parse`/`validate`/`normalize`.
//! - [`error`]: the construction-time and strict-scan error taxonomies.
//!
//! # Design notes
//!
//! - Everything is plain data: descriptors hold `fn` pointers, so header
//!   definitions are `static`s built once and shared process-wide.
//! - Header values are immutable; the only interior state is a write-once
//!   cache of the rendered value string.
//! - Operations come in a direct form (`key.set(&header, v)`) and a
//!   curried form (`key.set_fn(v)`) consumable through `Header::pipe` —
//!   pick whichever reads better at the call site.
//! - Lenient parsing never fails on malformed fragments; it drops them
//!   (logged at `debug!` level) and reconstructs what remains. Strict
//!   validation reports unknown, duplicate, empty and malformed fragments
//!   as a plain `false`.

pub mod directive;
pub mod duration;
pub mod error;
pub mod header;

mod encode;
mod utils;
