//! Type definitions for probe results and alerts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome class of a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    /// Responded with HTTP 200
    Online,
    /// Responded, but not with HTTP 200
    Error,
    /// Did not respond
    Offline,
}

impl ServiceState {
    /// Whether the probe succeeded
    #[inline]
    pub fn is_online(self) -> bool {
        matches!(self, ServiceState::Online)
    }

    /// Lowercase name, as serialized
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceState::Online => "online",
            ServiceState::Error => "error",
            ServiceState::Offline => "offline",
        }
    }

    /// Severity of an alert reporting this state
    pub fn severity(self) -> AlertSeverity {
        match self {
            ServiceState::Online => AlertSeverity::Info,
            ServiceState::Error => AlertSeverity::Warning,
            ServiceState::Offline => AlertSeverity::Critical,
        }
    }

    /// Marker used in chat messages
    pub fn emoji(self) -> &'static str {
        match self {
            ServiceState::Online => "✅",
            ServiceState::Error => "⚠️",
            ServiceState::Offline => "🔴",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of probing one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Probe outcome
    pub status: ServiceState,
    /// Wall-clock seconds from request start to outcome
    pub response_time: f64,
    /// Failure detail, empty when online
    pub error_message: String,
}

impl CheckResult {
    /// Successful probe
    pub fn online(response_time: f64) -> Self {
        Self {
            status: ServiceState::Online,
            response_time,
            error_message: String::new(),
        }
    }

    /// Probe that got a non-200 response
    pub fn error(response_time: f64, message: impl Into<String>) -> Self {
        Self {
            status: ServiceState::Error,
            response_time,
            error_message: message.into(),
        }
    }

    /// Probe that got no response
    pub fn offline(response_time: f64, message: impl Into<String>) -> Self {
        Self {
            status: ServiceState::Offline,
            response_time,
            error_message: message.into(),
        }
    }
}

/// Latest known status of a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Display name
    pub name: String,
    /// Probed URL
    pub url: String,
    /// Outcome of the latest probe
    pub status: ServiceState,
    /// When the latest probe completed
    pub last_check: chrono::DateTime<chrono::Utc>,
    /// Seconds the latest probe took
    pub response_time: f64,
    /// Failure detail of the latest probe
    pub error_message: String,
}

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
    Emergency,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Info => write!(f, "INFO"),
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
            AlertSeverity::Emergency => write!(f, "EMERGENCY"),
        }
    }
}

/// Alert information
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    /// Alert ID
    pub id: String,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Alert title
    pub title: String,
    /// Rendered chat text
    pub description: String,
    /// Alert timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Service id, or `system` for monitor notices
    pub source: String,
    /// Alert metadata
    pub metadata: serde_json::Value,
    /// Whether the alert reports a recovery
    pub resolved: bool,
}
