//! Logging setup.
//!
//! Structured JSON logs via `tracing`. Call [`init`] once at process
//! startup; library code only ever emits through the `tracing` macros.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG` when set; otherwise defaults this crate to info,
/// or debug when `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();
}
