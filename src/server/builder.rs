//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the binary.

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::monitoring::MonitoringSystem;
use crate::monitoring::alerts::AlertManager;
use crate::server::server::HttpServer;
use crate::utils::error::{MonitorError, Result};
use std::path::PathBuf;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    alerts: Option<AlertManager>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a pre-built alert manager instead of the configured channels
    pub fn with_alert_manager(mut self, alerts: AlertManager) -> Self {
        self.alerts = Some(alerts);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| MonitorError::config("Configuration is required"))?;
        config.validate()?;

        let monitoring = match self.alerts {
            Some(alerts) => MonitoringSystem::with_alert_manager(&config, alerts)?,
            None => MonitoringSystem::new(&config)?,
        };

        Ok(HttpServer::with_monitoring(&config, monitoring))
    }
}

/// Startup options, usually taken from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Configuration file
    pub config_path: PathBuf,
    /// Fail when the configuration file is missing
    pub require_config: bool,
    /// Bind host override
    pub host: Option<String>,
    /// Bind port override
    pub port: Option<u16>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            require_config: false,
            host: None,
            port: None,
        }
    }
}

impl RunOptions {
    /// Load configuration and apply the command line overrides
    pub async fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(&self.config_path, self.require_config).await?;

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Load configuration, start monitoring and serve HTTP
pub async fn run_server(options: RunOptions) -> Result<()> {
    info!("🚀 Starting monitor API v{}", crate::VERSION);
    info!("📄 Configuration file: {}", options.config_path.display());

    let config = options.load_config().await?;

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!("🌐 Server starting at: http://{}", config.server.address());
    info!("📋 API Endpoints:");
    info!("   GET  /            - Monitor information");
    info!("   GET  /health      - Health check");
    info!("   GET  /status      - Status of all services");
    info!("   GET  /alerts      - Alert history");
    info!("   GET  /version     - Build information");
    info!("   POST /check/{{id}}  - Force a check");
    info!("   POST /test-alert  - Send a test notification");

    server.start().await
}
