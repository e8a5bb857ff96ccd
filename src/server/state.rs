//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::monitoring::MonitoringSystem;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Monitoring system driving probes and alerts
    pub monitoring: MonitoringSystem,
}

impl AppState {
    /// Create a new AppState around a monitoring system
    pub fn new(monitoring: MonitoringSystem) -> Self {
        Self { monitoring }
    }

    /// Get monitor configuration
    pub fn config(&self) -> &Config {
        self.monitoring.config()
    }
}
