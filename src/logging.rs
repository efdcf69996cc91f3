//! Tracing initialization.
//!
//! Logs go to stderr so they never mix with the signature listing on stdout.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing with `default_level` unless `RUST_LOG` is set.
/// Safe to call multiple times; only the first call has an effect.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(console::colors_enabled_stderr())
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        if let Err(e) = builder.try_init() {
            eprintln!("Failed to initialize tracing: {e}")
        }
    });
}

/// Log level for a `-v` count: none keeps the configured level.
pub fn level_for_verbosity(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
