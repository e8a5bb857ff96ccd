//! Alert manager implementation

use super::channels::{NotificationChannel, SlackChannel, WhatsAppChannel};
use super::types::{AlertStats, AlertStorage};
use crate::config::AlertingConfig;
use crate::monitoring::types::{Alert, AlertSeverity};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::RwLock as TokioRwLock;
use tracing::{debug, info, warn};

/// Default number of alerts returned by [`AlertManager::get_history`]
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Alert manager for recording and dispatching alerts
#[derive(Debug, Clone)]
pub struct AlertManager {
    /// Consolidated storage for all alert-related data
    storage: Arc<RwLock<AlertStorage>>,
    /// Notification channels - using tokio RwLock because we need to hold across await points
    channels: Arc<TokioRwLock<Vec<Box<dyn NotificationChannel>>>>,
}

impl AlertManager {
    /// Create an alert manager with the channels enabled in `config`
    pub fn new(config: &AlertingConfig) -> Result<Self> {
        let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();

        if config.whatsapp.is_configured() {
            channels.push(Box::new(WhatsAppChannel::new(
                &config.whatsapp,
                AlertSeverity::Info,
            )?));
        }

        if let Some(webhook_url) = &config.slack_webhook {
            channels.push(Box::new(SlackChannel::new(
                webhook_url.clone(),
                None,
                AlertSeverity::Info,
            )?));
        }

        Ok(Self::with_channels(channels))
    }

    /// Create an alert manager with explicit channels
    pub fn with_channels(channels: Vec<Box<dyn NotificationChannel>>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(AlertStorage::default())),
            channels: Arc::new(TokioRwLock::new(channels)),
        }
    }

    /// Register an additional channel
    pub async fn add_channel(&self, channel: Box<dyn NotificationChannel>) {
        info!("Adding notification channel: {}", channel.name());
        self.channels.write().await.push(channel);
    }

    /// Names of the registered channels
    pub async fn channel_names(&self) -> Vec<String> {
        self.channels
            .read()
            .await
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Record an alert and deliver it
    ///
    /// Returns whether at least one channel accepted the alert. Delivery
    /// failures are logged and counted, never returned.
    pub async fn send_alert(&self, alert: Alert) -> bool {
        debug!("Dispatching alert: {} - {}", alert.severity, alert.title);

        self.storage.write().record(&alert);

        // Using tokio RwLock here - safe to hold across await points
        let channels = self.channels.read().await;

        if channels.is_empty() {
            warn!("No notification channel configured");
            info!("Message that would be sent:\n{}", alert.description);
            return false;
        }

        let mut delivered = false;
        for channel in channels.iter() {
            if !channel.supports_severity(alert.severity) {
                continue;
            }

            match channel.send(&alert).await {
                Ok(()) => {
                    info!("Alert sent via {}", channel.name());
                    self.storage.write().stats.delivered_notifications += 1;
                    delivered = true;
                }
                Err(e) => {
                    warn!("Failed to send alert via {}: {}", channel.name(), e);
                    self.storage.write().stats.failed_notifications += 1;
                }
            }
        }

        delivered
    }

    /// Get alert statistics
    pub fn get_stats(&self) -> AlertStats {
        self.storage.read().stats.clone()
    }

    /// Get alert history, newest first
    pub fn get_history(&self, limit: Option<usize>) -> Vec<Alert> {
        let storage = self.storage.read();
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

        storage.history.iter().rev().take(limit).cloned().collect()
    }
}
