//! Monitored services configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Display name used in alerts and the root endpoint
    #[serde(default = "default_monitor_name")]
    pub name: String,
    /// Consecutive failed probes before a service is reported down
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u32,
    /// Probe timeout in seconds
    #[serde(default = "default_check_timeout")]
    pub check_timeout_secs: u64,
    /// Services to probe
    #[serde(default = "default_services")]
    pub services: Vec<ServiceConfig>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            name: default_monitor_name(),
            failure_threshold: default_failure_threshold(),
            check_timeout_secs: default_check_timeout(),
            services: default_services(),
        }
    }
}

impl MonitorConfig {
    /// Probe timeout
    pub fn check_timeout(&self) -> Duration {
        Duration::from_secs(self.check_timeout_secs)
    }

    /// Find a service by id
    pub fn service(&self, id: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Validate monitoring configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Monitor name cannot be empty".to_string());
        }

        if self.failure_threshold == 0 {
            return Err("Failure threshold must be at least 1".to_string());
        }

        if self.check_timeout_secs == 0 {
            return Err("Check timeout cannot be 0".to_string());
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            service.validate()?;
            if !seen.insert(service.id.as_str()) {
                return Err(format!("Duplicate service id: {}", service.id));
            }
        }

        Ok(())
    }
}

/// A single monitored service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Unique key, used in `/status` and `/check/{id}`
    pub id: String,
    /// Display name
    pub name: String,
    /// Health endpoint to probe
    pub url: String,
    /// Seconds to wait between probes
    #[serde(default = "default_check_interval", alias = "interval")]
    pub interval_secs: u64,
}

impl ServiceConfig {
    /// Create a service with the default interval
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            interval_secs: default_check_interval(),
        }
    }

    /// Set the probe interval
    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs;
        self
    }

    /// Delay between probes
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Validate a service entry
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Service id cannot be empty".to_string());
        }

        if self.name.trim().is_empty() {
            return Err(format!("Service {} has an empty name", self.id));
        }

        let parsed = url::Url::parse(&self.url)
            .map_err(|e| format!("Service {} has an invalid url '{}': {}", self.id, self.url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "Service {} url must use http or https, got {}",
                self.id,
                parsed.scheme()
            ));
        }

        if self.interval_secs == 0 {
            return Err(format!("Service {} interval cannot be 0", self.id));
        }

        Ok(())
    }
}

/// Services probed when no configuration file lists any
pub fn default_services() -> Vec<ServiceConfig> {
    vec![
        ServiceConfig::new(
            "frontend_dev",
            "Frontend Dev",
            "https://dev.julgadosbr.com.br/health",
        ),
        ServiceConfig::new(
            "frontend_prod",
            "Frontend Prod",
            "https://julgadosbr.com.br/health",
        ),
        ServiceConfig::new(
            "backend",
            "Backend API",
            "https://api.dev.julgadosbr.com.br/health",
        ),
    ]
}
