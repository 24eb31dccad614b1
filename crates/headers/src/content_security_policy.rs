//! The `Content-Security-Policy` header.
//!
//! Most CSP directives are *source lists*: space-separated sets of keyword
//! tokens (`'self'`, `'unsafe-inline'`, ...) and host expressions. Source
//! lists order keywords ahead of host tokens (keyword-table order first,
//! hosts lexicographic after), and a `'none'` token swallows the whole
//! list. `sandbox` is a keyword directive over the closed `allow-*` set,
//! `report-to` a free-form string, and `upgrade-insecure-requests` a bare
//! flag.
//!
//! ```
//! use header_catalog::content_security_policy::{CONTENT_SECURITY_POLICY, DEFAULT_SRC, SCRIPT_SRC};
//!
//! let header = CONTENT_SECURITY_POLICY
//!     .builder()
//!     .list(SCRIPT_SRC, ["example.com", "'self'"])
//!     .list(DEFAULT_SRC, ["'none'"])
//!     .build()
//!     .unwrap();
//! assert_eq!(header.to_value_string(), "default-src 'none';script-src 'self' example.com");
//! ```

use std::cmp::Ordering;

use header_directives::directive::{Directive, FlagKey, ListKey, ListSpec, TokenKey, TokenSpec};
use header_directives::header::HeaderDef;

/// Keyword tokens in their serialization priority order; everything else
/// in a source list is a host expression and sorts after them.
const SOURCE_KEYWORDS: [&str; 15] = [
    "'none'",
    "'self'",
    "'strict-dynamic'",
    "'report-sample'",
    "'inline-speculation-rules'",
    "https:",
    "http:",
    "data:",
    "'unsafe-inline'",
    "'unsafe-eval'",
    "'unsafe-hashes'",
    "'wasm-unsafe-eval'",
    "'sha256'",
    "'sha384'",
    "'sha512'",
];

fn keyword_rank(value: &str) -> Option<usize> {
    SOURCE_KEYWORDS.iter().position(|keyword| *keyword == value)
}

fn is_source(value: &str) -> bool {
    keyword_rank(value).is_some() || (!value.is_empty() && !value.chars().any(char::is_whitespace))
}

fn source_order(a: &str, b: &str) -> Ordering {
    match (keyword_rank(a), keyword_rank(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// `'none'` makes every other source token irrelevant.
fn collapse_none(values: &mut Vec<String>) {
    if values.iter().any(|value| value == "'none'") {
        values.clear();
        values.push("'none'".to_owned());
    }
}

const fn source_list(name: &'static str, key: &'static str) -> Directive {
    Directive::list(
        name,
        key,
        ListSpec::new(is_source).separated_by(" ").ordered_by(source_order).collapsed_with(collapse_none),
    )
}

/// `frame-ancestors` only accepts its closed keyword set.
fn is_frame_ancestor(value: &str) -> bool {
    matches!(value, "'none'" | "'self'" | "'https:'" | "'http:'" | "'data:'")
}

fn is_sandbox_value(value: &str) -> bool {
    matches!(
        value,
        "allow-downloads"
            | "allow-forms"
            | "allow-modals"
            | "allow-orientation-lock"
            | "allow-pointer-lock"
            | "allow-popups"
            | "allow-popups-to-escape-sandbox"
            | "allow-presentation"
            | "allow-same-origin"
            | "allow-scripts"
            | "allow-top-navigation"
            | "allow-top-navigation-by-user-activation"
            | "allow-top-navigation-to-custom-protocols"
    )
}

static CSP_DIRECTIVES: [Directive; 22] = [
    source_list("child-src", "child_src"),
    source_list("connect-src", "connect_src"),
    source_list("default-src", "default_src"),
    source_list("font-src", "font_src"),
    source_list("form-action", "form_action"),
    Directive::list(
        "frame-ancestors",
        "frame_ancestors",
        ListSpec::new(is_frame_ancestor)
            .separated_by(" ")
            .ordered_by(source_order)
            .collapsed_with(collapse_none),
    ),
    source_list("frame-src", "frame_src"),
    source_list("img-src", "img_src"),
    source_list("manifest-src", "manifest_src"),
    source_list("media-src", "media_src"),
    source_list("object-src", "object_src"),
    Directive::token("sandbox", "sandbox", TokenSpec::keyword(is_sandbox_value)),
    source_list("script-src", "script_src"),
    source_list("script-src-elem", "script_src_elem"),
    source_list("script-src-attr", "script_src_attr"),
    source_list("style-src", "style_src"),
    source_list("style-src-elem", "style_src_elem"),
    source_list("style-src-attr", "style_src_attr"),
    source_list("worker-src", "worker_src"),
    Directive::flag("upgrade-insecure-requests", "upgrade_insecure_requests"),
    source_list("base-uri", "base_uri"),
    Directive::token("report-to", "report_to", TokenSpec::text()),
];

/// The `Content-Security-Policy` definition.
pub static CONTENT_SECURITY_POLICY: HeaderDef =
    HeaderDef::new("content-security-policy", ";", &CSP_DIRECTIVES);

pub const CHILD_SRC: ListKey = ListKey::new("child_src");
pub const CONNECT_SRC: ListKey = ListKey::new("connect_src");
pub const DEFAULT_SRC: ListKey = ListKey::new("default_src");
pub const FONT_SRC: ListKey = ListKey::new("font_src");
pub const FORM_ACTION: ListKey = ListKey::new("form_action");
pub const FRAME_ANCESTORS: ListKey = ListKey::new("frame_ancestors");
pub const FRAME_SRC: ListKey = ListKey::new("frame_src");
pub const IMG_SRC: ListKey = ListKey::new("img_src");
pub const MANIFEST_SRC: ListKey = ListKey::new("manifest_src");
pub const MEDIA_SRC: ListKey = ListKey::new("media_src");
pub const OBJECT_SRC: ListKey = ListKey::new("object_src");
pub const SANDBOX: TokenKey = TokenKey::new("sandbox");
pub const SCRIPT_SRC: ListKey = ListKey::new("script_src");
pub const SCRIPT_SRC_ELEM: ListKey = ListKey::new("script_src_elem");
pub const SCRIPT_SRC_ATTR: ListKey = ListKey::new("script_src_attr");
pub const STYLE_SRC: ListKey = ListKey::new("style_src");
pub const STYLE_SRC_ELEM: ListKey = ListKey::new("style_src_elem");
pub const STYLE_SRC_ATTR: ListKey = ListKey::new("style_src_attr");
pub const WORKER_SRC: ListKey = ListKey::new("worker_src");
pub const UPGRADE_INSECURE_REQUESTS: FlagKey = FlagKey::new("upgrade_insecure_requests");
pub const BASE_URI: ListKey = ListKey::new("base_uri");
pub const REPORT_TO: TokenKey = TokenKey::new("report_to");
