//! # monitor-api
//!
//! Uptime monitor for HTTP health endpoints.
//!
//! ## Features
//!
//! - **Periodic probes**: every configured service is checked on its own interval
//! - **Outage detection**: alerts after consecutive failures, and again on recovery
//! - **Notifications**: WhatsApp through an Evolution API gateway, optional Slack webhook
//! - **JSON API**: status, health, forced checks, test alerts and alert history
//!
//! ## Running
//!
//! ```rust,no_run
//! use monitor_api::server::{RunOptions, run_server};
//!
//! #[tokio::main]
//! async fn main() -> monitor_api::Result<()> {
//!     run_server(RunOptions::default()).await
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod monitoring;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use monitoring::MonitoringSystem;
pub use utils::error::{MonitorError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Unix time of the build
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

/// Build information baked in by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}
