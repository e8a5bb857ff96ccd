//! Configuration management for the monitor
//!
//! Configuration is read from a YAML file, then overridden from the
//! environment, then validated.

pub mod models;

pub use models::*;

use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/monitor.yaml";

/// Main configuration struct for the monitor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Monitored services
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// Notification channels
    #[serde(default)]
    pub alerting: AlertingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| MonitorError::config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration for a running process
    ///
    /// Reads `path` when it exists. A missing file falls back to defaults
    /// unless `required` is set. Environment overrides are applied last.
    pub async fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if tokio::fs::try_exists(path).await? {
            Self::from_file(path).await?
        } else if required {
            return Err(MonitorError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        } else {
            warn!(
                "Config file {} not found, using built-in defaults",
                path.display()
            );
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from environment-style variables
    ///
    /// `lookup` returns the value of a variable, if set. Empty values are
    /// ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("WHATSAPP_API_URL") {
            self.alerting.whatsapp.api_url = url;
        }
        if let Some(instance) = get("WHATSAPP_INSTANCE") {
            self.alerting.whatsapp.instance = instance;
        }
        if let Some(key) = get("WHATSAPP_API_KEY") {
            self.alerting.whatsapp.api_key = key;
        }
        if let Some(phone) = get("WHATSAPP_PHONE") {
            self.alerting.whatsapp.phone = phone;
        }
        if let Some(webhook) = get("SLACK_WEBHOOK_URL") {
            self.alerting.slack_webhook = Some(webhook);
        }
        if let Some(host) = get("MONITOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("MONITOR_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| MonitorError::config(format!("Invalid port '{}': {}", port, e)))?;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get monitoring configuration
    pub fn monitor(&self) -> &MonitorConfig {
        &self.monitor
    }

    /// Get alerting configuration
    pub fn alerting(&self) -> &AlertingConfig {
        &self.alerting
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| MonitorError::config(format!("Server config error: {}", e)))?;

        self.monitor
            .validate()
            .map_err(|e| MonitorError::config(format!("Monitor config error: {}", e)))?;

        self.alerting
            .validate()
            .map_err(|e| MonitorError::config(format!("Alerting config error: {}", e)))?;

        if self.monitor.services.is_empty() {
            warn!("No services configured, nothing will be monitored");
        }

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
