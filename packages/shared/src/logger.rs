//! Logging setup shared by every binary.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter defaults to `<bin_name>=<default_level>,tower_http=info` and can
/// be overridden with the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `bin_name` - The binary name (dashes are normalized to underscores to
///   match the crate's tracing target)
/// * `default_level` - Log level used when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let target = bin_name.replace('-', "_");
    let directive = format!("{target}={default_level},tower_http=info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("logger initialized for '{bin_name}'");
}
