//! Logging setup
//!
//! Diagnostics go to stderr so stdout stays clean for conversion output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Pick the log filter: `--verbose` wins, then `RUST_LOG`, then `warn`
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(build_filter(verbose));

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
