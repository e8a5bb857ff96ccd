//! Alerting configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Alerting configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// WhatsApp delivery through an Evolution API gateway
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    /// Slack incoming webhook URL
    #[serde(default)]
    pub slack_webhook: Option<String>,
}

impl AlertingConfig {
    /// Validate alerting configuration
    pub fn validate(&self) -> Result<(), String> {
        self.whatsapp.validate()?;

        if let Some(webhook) = &self.slack_webhook {
            url::Url::parse(webhook).map_err(|e| format!("Invalid Slack webhook url: {}", e))?;
        }

        Ok(())
    }
}

/// Evolution API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Base URL of the Evolution API
    #[serde(default)]
    pub api_url: String,
    /// Evolution API instance name
    #[serde(default = "default_whatsapp_instance")]
    pub instance: String,
    /// API key sent in the `apikey` header
    #[serde(default)]
    pub api_key: String,
    /// Destination phone number
    #[serde(default)]
    pub phone: String,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            instance: default_whatsapp_instance(),
            api_key: String::new(),
            phone: String::new(),
        }
    }
}

impl WhatsAppConfig {
    /// Whether enough settings are present to deliver messages
    pub fn is_configured(&self) -> bool {
        !self.api_url.is_empty() && !self.api_key.is_empty() && !self.phone.is_empty()
    }

    /// Endpoint used to send a text message
    pub fn send_text_url(&self) -> String {
        format!(
            "{}/message/sendText/{}",
            self.api_url.trim_end_matches('/'),
            self.instance
        )
    }

    /// Validate WhatsApp configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.api_url.is_empty() {
            url::Url::parse(&self.api_url)
                .map_err(|e| format!("Invalid WhatsApp api_url '{}': {}", self.api_url, e))?;
        }

        if self.instance.trim().is_empty() {
            return Err("WhatsApp instance cannot be empty".to_string());
        }

        let any_set =
            !self.api_url.is_empty() || !self.api_key.is_empty() || !self.phone.is_empty();
        if any_set && !self.is_configured() {
            warn!("WhatsApp is partially configured; api_url, api_key and phone are all required");
        }

        Ok(())
    }
}
