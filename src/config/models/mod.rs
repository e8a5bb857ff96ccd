//! Configuration data models
//!
//! This module defines all configuration structures used by the monitor.

pub mod alerting;
pub mod monitor;
pub mod server;

pub use alerting::*;
pub use monitor::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default monitor display name
pub fn default_monitor_name() -> String {
    "Monitor JulgadosBR".to_string()
}

/// Consecutive failed probes before a service is reported down
pub fn default_failure_threshold() -> u32 {
    2
}

/// Default probe timeout in seconds
pub fn default_check_timeout() -> u64 {
    10
}

/// Default probe interval in seconds
pub fn default_check_interval() -> u64 {
    60
}

/// Default Evolution API instance name
pub fn default_whatsapp_instance() -> String {
    "monitor-julgados-2".to_string()
}
