//! Alert construction and chat text rendering
//!
//! Texts use WhatsApp markup (`*bold*`).

use crate::config::ServiceConfig;
use crate::monitoring::types::{Alert, AlertSeverity, ServiceState};

/// Source recorded for alerts not tied to a service
pub const SYSTEM_SOURCE: &str = "system";

/// Detail attached to recovery alerts
pub const RECOVERED_DETAIL: &str = "Service recovered ✅";

/// Format a timestamp the way alerts display it, in local time
pub fn format_alert_time(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    timestamp
        .with_timezone(&chrono::Local)
        .format("%d/%m/%Y %H:%M:%S")
        .to_string()
}

/// Render the chat text for a service state alert
pub fn render_service_text(
    monitor_name: &str,
    service_name: &str,
    state: ServiceState,
    detail: &str,
    timestamp: chrono::DateTime<chrono::Utc>,
) -> String {
    let mut text = format!(
        "{} *{} Alert*\n\n*Service:* {}\n*Status:* {}\n*Time:* {}",
        state.emoji(),
        monitor_name,
        service_name,
        state.as_str().to_uppercase(),
        format_alert_time(timestamp)
    );

    if !detail.is_empty() {
        text.push_str("\n*Error:* ");
        text.push_str(detail);
    }

    text
}

/// Alert raised when a service reaches the failure threshold
pub fn service_down(
    monitor_name: &str,
    service: &ServiceConfig,
    state: ServiceState,
    detail: &str,
) -> Alert {
    service_alert(monitor_name, service, state, detail, false)
}

/// Alert raised when a service answers again after an outage
pub fn service_recovered(monitor_name: &str, service: &ServiceConfig) -> Alert {
    service_alert(
        monitor_name,
        service,
        ServiceState::Online,
        RECOVERED_DETAIL,
        true,
    )
}

fn service_alert(
    monitor_name: &str,
    service: &ServiceConfig,
    state: ServiceState,
    detail: &str,
    resolved: bool,
) -> Alert {
    let timestamp = chrono::Utc::now();
    let title = if resolved {
        format!("{} recovered", service.name)
    } else {
        format!("{} is {}", service.name, state.as_str().to_uppercase())
    };

    Alert {
        id: uuid::Uuid::new_v4().to_string(),
        severity: state.severity(),
        title,
        description: render_service_text(monitor_name, &service.name, state, detail, timestamp),
        timestamp,
        source: service.id.clone(),
        metadata: serde_json::json!({
            "service": service.name,
            "url": service.url,
            "status": state,
            "error": detail,
        }),
        resolved,
    }
}

/// Notice sent once the monitor has started its service tasks
pub fn startup_notice(monitor_name: &str, service_count: usize) -> Alert {
    notice(
        format!("{} Started", monitor_name),
        format!(
            "🚀 *{} Started*\n\nMonitoring {} services.\nYou will be alerted if anything goes offline.",
            monitor_name, service_count
        ),
    )
}

/// Notice used to verify notification delivery
pub fn test_notice() -> Alert {
    notice(
        "Notification Test".to_string(),
        "🧪 *Notification Test*\n\nIf you received this message, the alerting system is working! ✅"
            .to_string(),
    )
}

fn notice(title: String, description: String) -> Alert {
    Alert {
        id: uuid::Uuid::new_v4().to_string(),
        severity: AlertSeverity::Info,
        title,
        description,
        timestamp: chrono::Utc::now(),
        source: SYSTEM_SOURCE.to_string(),
        metadata: serde_json::json!({}),
        resolved: false,
    }
}
