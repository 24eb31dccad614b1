//! Name-based lookup over the catalog definitions.
//!
//! The registry maps wire header names to their definitions, so generic
//! code (proxies, header sanitizers) can normalize whatever arrives without
//! knowing the concrete header up front. `cache-control` resolves to the
//! response variant, which carries the larger directive table; the request
//! variant stays reachable through [`crate::cache_control::REQUEST`].

use std::collections::HashMap;

use header_directives::header::HeaderDef;
use once_cell::sync::Lazy;

use crate::access_control;
use crate::cache_control;
use crate::content_security_policy::CONTENT_SECURITY_POLICY;
use crate::cross_origin;
use crate::strict_transport_security::STRICT_TRANSPORT_SECURITY;
use crate::x_content_type_options::X_CONTENT_TYPE_OPTIONS;

static REGISTRY: Lazy<HashMap<&'static str, &'static HeaderDef>> = Lazy::new(|| {
    let definitions: [&'static HeaderDef; 13] = [
        &cache_control::RESPONSE,
        &CONTENT_SECURITY_POLICY,
        &access_control::ALLOW_HEADERS,
        &access_control::ALLOW_METHODS,
        &access_control::ALLOW_ORIGIN,
        &access_control::ALLOW_CREDENTIALS,
        &access_control::EXPOSE_HEADERS,
        &access_control::MAX_AGE,
        &cross_origin::EMBEDDER_POLICY,
        &cross_origin::OPENER_POLICY,
        &cross_origin::RESOURCE_POLICY,
        &STRICT_TRANSPORT_SECURITY,
        &X_CONTENT_TYPE_OPTIONS,
    ];

    definitions.into_iter().map(|def| (def.name(), def)).collect()
});

/// Finds a catalog definition by header name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static HeaderDef> {
    REGISTRY.get(name.to_ascii_lowercase().as_str()).copied()
}

/// The wire names of every registered header.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
