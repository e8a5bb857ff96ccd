//! Shared fixtures for the integration tests

use monitor_api::Config;
use monitor_api::config::{ServiceConfig, WhatsAppConfig};
use monitor_api::monitoring::MonitoringSystem;
use monitor_api::monitoring::alerts::AlertManager;
use wiremock::MockServer;

/// Evolution API instance used by the fixtures
pub const INSTANCE: &str = "monitor-test";

/// API key the fixtures configure
pub const API_KEY: &str = "test-api-key";

/// Destination phone number the fixtures configure
pub const PHONE: &str = "5511999999999";

/// A service whose health endpoint is served by `server`
pub fn service_on(server: &MockServer, id: &str) -> ServiceConfig {
    ServiceConfig::new(id, format!("Service {}", id), format!("{}/health", server.uri()))
        .with_interval(1)
}

/// WhatsApp settings pointing at a mocked Evolution API
pub fn whatsapp_on(gateway: &MockServer) -> WhatsAppConfig {
    WhatsAppConfig {
        api_url: gateway.uri(),
        instance: INSTANCE.to_string(),
        api_key: API_KEY.to_string(),
        phone: PHONE.to_string(),
    }
}

/// Configuration monitoring `services` with alerting disabled
pub fn config_with(services: Vec<ServiceConfig>) -> Config {
    let mut config = Config::default();
    config.monitor.name = "Test Monitor".to_string();
    config.monitor.check_timeout_secs = 2;
    config.monitor.services = services;
    config
}

/// Monitoring system with no notification channels
pub fn silent_system(config: &Config) -> MonitoringSystem {
    MonitoringSystem::with_alert_manager(config, AlertManager::with_channels(Vec::new()))
        .expect("monitoring system")
}

/// Path the mocked Evolution API receives messages on
pub fn send_text_path() -> String {
    format!("/message/sendText/{}", INSTANCE)
}
