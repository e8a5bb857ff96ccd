//! Notification channel implementations

use crate::config::WhatsAppConfig;
use crate::monitoring::types::{Alert, AlertSeverity};
use crate::utils::error::{MonitorError, Result};
use crate::utils::truncate_string;
use reqwest::StatusCode;
use std::time::Duration;

/// Timeout for a single notification request
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Notification channel trait
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Send a notification
    async fn send(&self, alert: &Alert) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;

    /// Check if channel supports severity level
    fn supports_severity(&self, severity: AlertSeverity) -> bool;
}

fn notification_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?)
}

/// WhatsApp channel backed by an Evolution API instance
#[derive(Debug)]
pub struct WhatsAppChannel {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    phone: String,
    min_severity: AlertSeverity,
}

impl WhatsAppChannel {
    /// Create a new WhatsApp notification channel
    pub fn new(config: &WhatsAppConfig, min_severity: AlertSeverity) -> Result<Self> {
        if !config.is_configured() {
            return Err(MonitorError::config(
                "WhatsApp channel requires api_url, api_key and phone",
            ));
        }

        Ok(Self {
            client: notification_client()?,
            endpoint: config.send_text_url(),
            api_key: config.api_key.clone(),
            phone: config.phone.clone(),
            min_severity,
        })
    }

    /// URL messages are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl NotificationChannel for WhatsAppChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        let payload = serde_json::json!({
            "number": self.phone,
            "text": alert.description,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MonitorError::notification(format!("Failed to reach Evolution API: {}", e)))?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(MonitorError::notification(format!(
            "Evolution API returned {}: {}",
            status.as_u16(),
            truncate_string(&body, 200)
        )))
    }

    fn name(&self) -> &str {
        "whatsapp"
    }

    fn supports_severity(&self, severity: AlertSeverity) -> bool {
        severity >= self.min_severity
    }
}

/// Slack notification channel
#[derive(Debug)]
pub struct SlackChannel {
    client: reqwest::Client,
    webhook_url: String,
    username: Option<String>,
    min_severity: AlertSeverity,
}

impl SlackChannel {
    /// Create a new Slack notification channel
    pub fn new(
        webhook_url: String,
        username: Option<String>,
        min_severity: AlertSeverity,
    ) -> Result<Self> {
        Ok(Self {
            client: notification_client()?,
            webhook_url,
            username,
            min_severity,
        })
    }

    fn color(severity: AlertSeverity) -> &'static str {
        match severity {
            AlertSeverity::Info => "#36a64f",
            AlertSeverity::Warning => "#ff9500",
            AlertSeverity::Critical => "#ff0000",
            AlertSeverity::Emergency => "#8b0000",
        }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for SlackChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        let payload = serde_json::json!({
            "username": self.username.as_deref().unwrap_or("Service Monitor"),
            "attachments": [{
                "color": Self::color(alert.severity),
                "title": alert.title,
                "text": alert.description,
                "fields": [
                    {
                        "title": "Severity",
                        "value": alert.severity.to_string(),
                        "short": true
                    },
                    {
                        "title": "Source",
                        "value": alert.source,
                        "short": true
                    }
                ],
                "ts": alert.timestamp.timestamp()
            }]
        });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                MonitorError::notification(format!("Failed to send Slack notification: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(MonitorError::notification(format!(
                "Slack webhook returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "slack"
    }

    fn supports_severity(&self, severity: AlertSeverity) -> bool {
        severity >= self.min_severity
    }
}
