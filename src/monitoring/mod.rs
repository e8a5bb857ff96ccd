//! Monitoring and alerting
//!
//! This module probes the configured services, tracks their status and
//! raises alerts on outages and recoveries.

pub mod alerts;
pub mod health;

mod background;
mod system;
mod types;

pub use system::MonitoringSystem;
pub use types::{Alert, AlertSeverity, CheckResult, ServiceState, ServiceStatus};
