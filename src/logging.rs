//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Initialise logging. Without `debug` the level is pinned to `info` and
/// `RUST_LOG` is ignored; with `debug` the default is `debug` and `RUST_LOG`
/// may override it.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
