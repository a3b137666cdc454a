//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation for the bdelta binary.
//!
//! Events are rendered by the `tracing-subscriber` fmt layer without
//! timestamps, one line per event, on stderr. Filtering combines the
//! verbosity level with `RUST_LOG`:
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(1));
//! tracing::info!(target: "bdelta::build", "patch written");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::VerbosityConfig;

/// Common prefix of every target emitted by the workspace macros.
pub const TARGET_PREFIX: &str = "bdelta";

fn build_filter(config: VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()))
}

/// Installs the global subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is left untouched.
pub fn init_tracing(config: VerbosityConfig) -> bool {
    init_tracing_with_writer(config, std::io::stderr)
}

/// Installs the global subscriber writing to `writer`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing_with_writer<W>(config: VerbosityConfig, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(config.level() >= 2)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
        .is_ok()
}
