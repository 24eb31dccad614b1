//! Normalizes raw header strings through the catalog registry.
//!
//! Run with `cargo run --example normalize -p header-catalog`.

use header_catalog::registry;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging; dropped directive segments show up at DEBUG.
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let samples = [
        ("cache-control", "Cache-Control: no-cache, MAX-AGE=600, bogus-directive"),
        ("cache-control", "no-cache, max-age=100, no-store"),
        ("content-security-policy", "script-src example.com 'self'; img-src 'none' cdn.example.com"),
        ("strict-transport-security", "preload; max-age=63072000; includeSubDomains"),
        ("access-control-allow-methods", "get, post, delete"),
    ];

    for (name, raw) in samples {
        let Some(def) = registry::lookup(name) else {
            warn!(name, "header not in catalog");
            continue;
        };

        match def.normalize(raw) {
            Ok(normalized) => info!(raw, normalized = %normalized, "normalized header"),
            Err(error) => warn!(raw, %error, "header did not survive normalization"),
        }
    }
}
