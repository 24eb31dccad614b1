//! The CORS `Access-Control-*` response headers.
//!
//! Each of these headers carries a single literal directive: the value
//! stands alone on the wire with no directive name. The list-valued ones
//! normalize case on serialization (header names lower-cased, methods
//! upper-cased) and collapse on a wildcard:
//!
//! - `Access-Control-Allow-Headers`: `*` swallows everything except an
//!   explicit `authorization`, which the wildcard does not cover.
//! - `Access-Control-Expose-Headers` and `Access-Control-Allow-Methods`:
//!   `*` swallows everything.

use std::cmp::Ordering;

use header_directives::directive::{Directive, FlagKey, ListKey, ListSpec, SecondsKey, TokenKey, TokenSpec};
use header_directives::header::HeaderDef;

fn is_any(_: &str) -> bool {
    true
}

/// `*` first, everything else lexicographic.
fn wildcard_first(a: &str, b: &str) -> Ordering {
    match (a == "*", b == "*") {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

fn collapse_header_names(values: &mut Vec<String>) {
    for value in values.iter_mut() {
        *value = value.to_ascii_lowercase();
    }
    if values.iter().any(|value| value == "*") {
        let keep_authorization = values.iter().any(|value| value == "authorization");
        values.clear();
        values.push("*".to_owned());
        if keep_authorization {
            values.push("authorization".to_owned());
        }
    }
}

fn collapse_exposed_names(values: &mut Vec<String>) {
    for value in values.iter_mut() {
        *value = value.to_ascii_lowercase();
    }
    if values.iter().any(|value| value == "*") {
        values.clear();
        values.push("*".to_owned());
    }
}

const METHOD_TOKENS: [&str; 10] =
    ["GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH", "*"];

fn is_method(value: &str) -> bool {
    METHOD_TOKENS.iter().any(|method| method.eq_ignore_ascii_case(value))
}

fn collapse_methods(values: &mut Vec<String>) {
    for value in values.iter_mut() {
        *value = value.to_ascii_uppercase();
    }
    if values.iter().any(|value| value == "*") {
        values.clear();
        values.push("*".to_owned());
    }
}

static ALLOW_HEADERS_DIRECTIVES: [Directive; 1] = [Directive::list(
    "headers",
    "headers",
    ListSpec::new(is_any).literal().ordered_by(wildcard_first).collapsed_with(collapse_header_names),
)];

/// `Access-Control-Allow-Headers`.
pub static ALLOW_HEADERS: HeaderDef =
    HeaderDef::new("access-control-allow-headers", "; ", &ALLOW_HEADERS_DIRECTIVES);

static EXPOSE_HEADERS_DIRECTIVES: [Directive; 1] = [Directive::list(
    "headers",
    "headers",
    ListSpec::new(is_any).literal().ordered_by(wildcard_first).collapsed_with(collapse_exposed_names),
)];

/// `Access-Control-Expose-Headers`.
pub static EXPOSE_HEADERS: HeaderDef =
    HeaderDef::new("access-control-expose-headers", "; ", &EXPOSE_HEADERS_DIRECTIVES);

static ALLOW_METHODS_DIRECTIVES: [Directive; 1] = [Directive::list(
    "methods",
    "methods",
    ListSpec::new(is_method).literal().ordered_by(wildcard_first).collapsed_with(collapse_methods),
)];

/// `Access-Control-Allow-Methods`.
pub static ALLOW_METHODS: HeaderDef =
    HeaderDef::new("access-control-allow-methods", "; ", &ALLOW_METHODS_DIRECTIVES);

static ALLOW_ORIGIN_DIRECTIVES: [Directive; 1] =
    [Directive::token("origin", "origin", TokenSpec::text().separated_by(",").literal())];

/// `Access-Control-Allow-Origin`.
pub static ALLOW_ORIGIN: HeaderDef =
    HeaderDef::new("access-control-allow-origin", "; ", &ALLOW_ORIGIN_DIRECTIVES);

static ALLOW_CREDENTIALS_DIRECTIVES: [Directive; 1] = [Directive::literal_flag("allow", "allow")];

/// `Access-Control-Allow-Credentials`; serializes as the bare token `true`.
pub static ALLOW_CREDENTIALS: HeaderDef =
    HeaderDef::new("access-control-allow-credentials", "; ", &ALLOW_CREDENTIALS_DIRECTIVES);

static MAX_AGE_DIRECTIVES: [Directive; 1] = [Directive::literal_seconds("max-age", "max_age")];

/// `Access-Control-Max-Age`; serializes as the bare number of seconds.
pub static MAX_AGE: HeaderDef = HeaderDef::new("access-control-max-age", "; ", &MAX_AGE_DIRECTIVES);

// Operation keys. HEADERS is shared by the allow and expose variants.
pub const HEADERS: ListKey = ListKey::new("headers");
pub const METHODS: ListKey = ListKey::new("methods");
pub const ORIGIN: TokenKey = TokenKey::new("origin");
pub const CREDENTIALS: FlagKey = FlagKey::new("allow");
pub const DELTA_SECONDS: SecondsKey = SecondsKey::new("max_age");
