//! Typed standard HTTP headers built on the `header-directives` framework.
//!
//! Every module in this crate is configuration data: a static directive
//! table, a [`header_directives::header::HeaderDef`] wiring it to a header
//! name and separator, and `const` operation keys for fluent updates. The
//! behavior — validation, canonical serialization, strict/lenient parsing,
//! the per-directive operation algebra — all lives in the framework crate.
//!
//! # Covered headers
//!
//! - [`cache_control`]: `Cache-Control`, request and response variants,
//!   with the `no-store` precedence collapse.
//! - [`content_security_policy`]: `Content-Security-Policy` source lists,
//!   sandbox, report-to.
//! - [`access_control`]: the six CORS `Access-Control-*` response headers
//!   with their wildcard collapse rules.
//! - [`cross_origin`]: COEP, COOP and CORP keyword headers.
//! - [`strict_transport_security`]: HSTS with its mandatory `max-age`.
//! - [`x_content_type_options`]: `nosniff`.
//! - [`registry`]: name → definition lookup across all of the above.
//!
//! # Example
//!
//! ```
//! use header_catalog::cache_control::{self, MAX_AGE, NO_CACHE};
//!
//! let header = cache_control::RESPONSE
//!     .builder()
//!     .seconds(MAX_AGE, 600)
//!     .flag(NO_CACHE, true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(header.to_header_string(), "cache-control: max-age=600,no-cache");
//!
//! // Operations return new immutable values.
//! let capped = MAX_AGE.with_max(&header, 300).unwrap();
//! assert_eq!(capped.to_value_string(), "max-age=300,no-cache");
//! assert_eq!(header.to_value_string(), "max-age=600,no-cache");
//! ```

pub mod access_control;
pub mod cache_control;
pub mod content_security_policy;
pub mod cross_origin;
pub mod registry;
pub mod strict_transport_security;
pub mod x_content_type_options;
