//! Core MonitoringSystem implementation

use crate::config::{Config, ServiceConfig};
use crate::utils::error::{MonitorError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::alerts::{AlertManager, messages};
use super::health::{HealthChecker, StatusBoard};
use super::types::{CheckResult, ServiceStatus};

/// Main monitoring system
#[derive(Debug, Clone)]
pub struct MonitoringSystem {
    /// Full configuration (shared read-only)
    pub(super) config: Arc<Config>,
    /// HTTP prober
    pub(super) checker: Arc<HealthChecker>,
    /// Latest result per service
    pub(super) board: Arc<StatusBoard>,
    /// Alert manager
    pub(super) alerts: AlertManager,
    /// Whether service tasks should keep running
    pub(super) active: Arc<AtomicBool>,
    /// Spawned service tasks
    pub(super) tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
    /// System start time
    pub(super) start_time: Instant,
}

impl MonitoringSystem {
    /// Create a new monitoring system
    pub fn new(config: &Config) -> Result<Self> {
        let alerts = AlertManager::new(&config.alerting)?;
        Self::with_alert_manager(config, alerts)
    }

    /// Create a monitoring system using the given alert manager
    pub fn with_alert_manager(config: &Config, alerts: AlertManager) -> Result<Self> {
        info!("Initializing monitoring system");

        let checker = HealthChecker::new(config.monitor.check_timeout())?;

        Ok(Self {
            config: Arc::new(config.clone()),
            checker: Arc::new(checker),
            board: Arc::new(StatusBoard::new()),
            alerts,
            active: Arc::new(AtomicBool::new(false)),
            tasks: Arc::new(Mutex::new(Vec::new())),
            start_time: Instant::now(),
        })
    }

    /// Start one monitoring task per service and announce the start
    pub async fn start(&self) -> Result<()> {
        if self.active.swap(true, Ordering::AcqRel) {
            warn!("Monitoring system already started");
            return Ok(());
        }

        self.log_banner();
        let channels = self.alerts.channel_names().await;
        if channels.is_empty() {
            warn!("No notification channel configured, alerts will only be logged");
        } else {
            info!("Notification channels: {}", channels.join(", "));
        }
        self.spawn_service_tasks();

        let notice = messages::startup_notice(&self.config.monitor.name, self.services().len());
        self.alerts.send_alert(notice).await;

        info!("Monitoring system started successfully");
        Ok(())
    }

    /// Stop all service tasks
    pub fn stop(&self) {
        info!("Stopping monitoring system");
        self.active.store(false, Ordering::Release);

        for handle in self.tasks.lock().drain(..) {
            handle.abort();
        }
    }

    /// Check if the service tasks are running
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    fn log_banner(&self) {
        let whatsapp = &self.config.alerting.whatsapp;
        let rule = "=".repeat(60);

        info!("{}", rule);
        info!("🚀 {} started", self.config.monitor.name);
        info!("{}", rule);
        info!("Evolution API: {}", whatsapp.api_url);
        info!("Instance: {}", whatsapp.instance);
        info!("WhatsApp number: {}", whatsapp.phone);
        info!("Monitored services: {}", self.services().len());
        info!("{}", rule);
    }

    /// Shared configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Configured services
    pub fn services(&self) -> &[ServiceConfig] {
        &self.config.monitor.services
    }

    /// Latest result per service
    pub fn board(&self) -> &StatusBoard {
        &self.board
    }

    /// Alert manager
    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    /// Copy of the status board
    pub fn status_snapshot(&self) -> HashMap<String, ServiceStatus> {
        self.board.snapshot()
    }

    /// Probe one configured service immediately
    ///
    /// Does not touch the status board or outage tracking.
    pub async fn check_now(&self, service_id: &str) -> Result<(ServiceConfig, CheckResult)> {
        let service = self
            .config
            .monitor
            .service(service_id)
            .cloned()
            .ok_or_else(|| MonitorError::not_found(format!("Service not found: {}", service_id)))?;

        info!("Manual check requested for {}", service.name);
        let result = self.checker.check(&service).await;
        Ok((service, result))
    }

    /// Send the notification test message
    pub async fn send_test_alert(&self) -> bool {
        self.alerts.send_alert(messages::test_notice()).await
    }

    /// Seconds since the system was created
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
