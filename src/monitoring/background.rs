//! Background task implementations for MonitoringSystem

use crate::config::ServiceConfig;
use tracing::{info, warn};

use super::alerts::messages;
use super::health::{FailureTracker, Transition};
use super::system::MonitoringSystem;

impl MonitoringSystem {
    /// Spawn one probe loop per configured service
    pub(super) fn spawn_service_tasks(&self) {
        let mut tasks = self.tasks.lock();

        for service in self.services().iter().cloned() {
            let monitoring = self.clone();
            tasks.push(tokio::spawn(async move {
                monitoring.monitor_service(service).await;
            }));
        }
    }

    /// Probe a service until the system is stopped
    async fn monitor_service(self, service: ServiceConfig) {
        info!("🔍 Starting monitoring: {} ({})", service.name, service.url);

        let mut tracker = FailureTracker::new(self.config.monitor.failure_threshold);

        while self.is_active() {
            self.run_check_cycle(&service, &mut tracker).await;
            tokio::time::sleep(service.interval()).await;
        }
    }

    /// Run a single probe, record it and raise any resulting alert
    pub async fn run_check_cycle(
        &self,
        service: &ServiceConfig,
        tracker: &mut FailureTracker,
    ) -> Option<Transition> {
        let result = self.checker.check(service).await;
        self.board.record(service, &result);

        if result.status.is_online() {
            info!(
                "✅ {}: {} ({:.2}s)",
                service.name, result.status, result.response_time
            );
        } else {
            warn!(
                "❌ {}: {} ({:.2}s) {}",
                service.name, result.status, result.response_time, result.error_message
            );
        }

        let transition = tracker.observe(result.status);
        let monitor_name = &self.config.monitor.name;

        match transition {
            Some(Transition::Down) => {
                warn!("🚨 ALERT: {} is {}!", service.name, result.status);
                let alert = messages::service_down(
                    monitor_name,
                    service,
                    result.status,
                    &result.error_message,
                );
                self.alerts.send_alert(alert).await;
            }
            Some(Transition::Recovered) => {
                info!("✅ RECOVERED: {} is back online", service.name);
                self.alerts
                    .send_alert(messages::service_recovered(monitor_name, service))
                    .await;
            }
            None => {}
        }

        transition
    }
}
