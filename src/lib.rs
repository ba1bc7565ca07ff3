// render-patch - one-shot maintenance patch for RenderWindow.cpp
// Removes a duplicated line and corrects the device handle passed to vkUnmapMemory

pub mod config;
pub mod diff;
pub mod error;
pub mod patch;
pub mod utils;

pub use config::PatchPlan;
pub use error::{PatchError, Result};
pub use patch::{PatchReport, PatchStage, Patcher, SUCCESS_MESSAGE};

use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build the tracing filter: `RUST_LOG` wins, otherwise `debug` when
/// verbose and `warn` when not
pub fn log_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "render_patch=debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global logger
///
/// Logs go to stderr so stdout carries only the success message or a diff.
pub fn init_with_logger(verbose: bool) {
    use tracing_subscriber::fmt;

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose))
        .with_target(verbose)
        .without_time()
        .init();

    debug!("render-patch v{}", version());
}
