//! The cross-origin isolation policy headers: COEP, COOP and CORP.
//!
//! Each is a single literal keyword over a fixed closed enum; the value
//! stands alone on the wire (`cross-origin-opener-policy: same-origin`).

use header_directives::directive::{Directive, TokenKey, TokenSpec};
use header_directives::header::HeaderDef;

fn is_embedder_policy(value: &str) -> bool {
    matches!(value, "require-corp" | "unsafe-none" | "credentialless")
}

fn is_opener_policy(value: &str) -> bool {
    matches!(value, "unsafe-none" | "same-origin" | "same-origin-allow-popups")
}

fn is_resource_policy(value: &str) -> bool {
    matches!(value, "same-site" | "same-origin" | "cross-origin")
}

static EMBEDDER_DIRECTIVES: [Directive; 1] =
    [Directive::token("directive", "directive", TokenSpec::keyword(is_embedder_policy).literal())];

/// `Cross-Origin-Embedder-Policy`.
pub static EMBEDDER_POLICY: HeaderDef =
    HeaderDef::new("cross-origin-embedder-policy", "; ", &EMBEDDER_DIRECTIVES);

static OPENER_DIRECTIVES: [Directive; 1] =
    [Directive::token("directive", "directive", TokenSpec::keyword(is_opener_policy).literal())];

/// `Cross-Origin-Opener-Policy`.
pub static OPENER_POLICY: HeaderDef =
    HeaderDef::new("cross-origin-opener-policy", "; ", &OPENER_DIRECTIVES);

static RESOURCE_DIRECTIVES: [Directive; 1] =
    [Directive::token("directive", "directive", TokenSpec::keyword(is_resource_policy).literal())];

/// `Cross-Origin-Resource-Policy`.
pub static RESOURCE_POLICY: HeaderDef =
    HeaderDef::new("cross-origin-resource-policy", "; ", &RESOURCE_DIRECTIVES);

/// The single keyword directive shared by all three headers.
pub const DIRECTIVE: TokenKey = TokenKey::new("directive");
