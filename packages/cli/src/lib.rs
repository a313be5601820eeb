// ABOUTME: VendorWorld server and command-line support
// ABOUTME: Configuration, logging setup, server startup, and report export

pub mod config;
pub mod report;
pub mod server;

pub use config::{Config, ConfigError};

/// Install the global tracing subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
