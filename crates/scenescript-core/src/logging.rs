//! Structured logging facility
//!
//! Single initialization point for the workspace's tracing subscriber.
//! Call `init(profile)` once at application startup; later calls are no-ops.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No subscriber output; tests assert on behavior, not logs
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Sets up the tracing subscriber based on the selected profile. The
/// `RUST_LOG` environment variable overrides the per-profile defaults.
///
/// # Example
///
/// ```
/// use scenescript_core::logging::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("scenescript=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("scenescript=info")),
                    )
                    .init();
            }
            Profile::Test => {
                // Registry with no layers; events are discarded
                tracing_subscriber::registry().init();
            }
        }
    });
}
