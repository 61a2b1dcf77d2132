//! iSalah
//!
//! Facade over the workspace crates:
//! - [`app_core`] - Hijri conversion, date formatting and day deltas
//! - [`app_state`] - Observable state and preference shapes
//! - [`app_ui`] - Navigation, coordinators, view-models and theme lookups

#![warn(missing_docs)]

pub use app_core;
pub use app_state;
pub use app_ui;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g. `"info"` or
/// `"app_ui=debug"`). Calling this again after a subscriber is installed
/// does nothing.
pub fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized");
    }
}
