//! Command-line driver for the mdsel selector language.
//!
//! The driver is thin: every command renders its output to a
//! `String` (so it can be tested without a process) and a small printing
//! wrapper decides the exit status.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=mdsel_lexer=trace` or `RUST_LOG=mdselc=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
