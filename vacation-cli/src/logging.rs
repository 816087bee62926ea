//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only warnings are shown, or debug output when
/// `verbose` is set. Records emitted through the `log` facade by the
/// library crates are bridged into the subscriber.
pub(crate) fn init(verbose: bool) -> Result<(), CliError> {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(CliError::Logging)
}
