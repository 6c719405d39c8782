#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! `declgen` renders a REST API type catalog into a single TypeScript
//! declaration file. The pipeline is:
//! 1. Parse: catalog JSON -> [`catalog::Catalog`]
//! 2. Emit: per-definition declaration blocks via [`emit`]
//! 3. Assemble: one namespace-wrapped text, one write

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod catalog;
pub mod emit;
mod generator;

pub use generator::generate_declarations;

/// Initialize the stderr tracing subscriber.
///
/// `DECLGEN_LOG` controls the log level: "trace", "debug", "info", "warn",
/// "error", or a full tracing filter spec like "declgen=debug".
pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    let filter = match std::env::var("DECLGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("{crate_root}={level}")
        }
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
