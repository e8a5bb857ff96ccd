//! Service status, manual check and alert endpoints

use crate::monitoring::{Alert, CheckResult, ServiceStatus};
use crate::monitoring::alerts::AlertStats;
use crate::server::state::AppState;
use crate::utils::error::MonitorError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Largest page accepted by `/alerts`
const MAX_ALERTS_LIMIT: usize = 1000;

/// Configure monitoring routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(get_status))
        .route("/alerts", web::get().to(get_alerts))
        .service(web::resource("/test-alert").route(web::post().to(test_alert)))
        .service(web::resource("/check/{service_id}").route(web::post().to(force_check)));
}

/// Current status of every service probed so far
pub async fn get_status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        timestamp: chrono::Utc::now(),
        services: state.monitoring.status_snapshot(),
    })
}

/// Send a test notification through the configured channels
pub async fn test_alert(state: web::Data<AppState>) -> HttpResponse {
    info!("Test alert requested");
    let success = state.monitoring.send_test_alert().await;

    HttpResponse::Ok().json(TestAlertResponse {
        message: "Test sent",
        success,
        phone: state.config().alerting.whatsapp.phone.clone(),
    })
}

/// Probe one service now
pub async fn force_check(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, MonitorError> {
    let service_id = path.into_inner();
    let (service, result) = state.monitoring.check_now(&service_id).await?;

    Ok(HttpResponse::Ok().json(CheckResponse {
        service: service.name,
        result,
    }))
}

/// Alert statistics and recent history
pub async fn get_alerts(
    state: web::Data<AppState>,
    query: web::Query<AlertsQuery>,
) -> Result<HttpResponse, MonitorError> {
    let limit = query.limit;
    if limit == Some(0) || limit.is_some_and(|l| l > MAX_ALERTS_LIMIT) {
        return Err(MonitorError::bad_request(format!(
            "limit must be between 1 and {}",
            MAX_ALERTS_LIMIT
        )));
    }

    let alerts = state.monitoring.alerts();
    Ok(HttpResponse::Ok().json(AlertsResponse {
        stats: alerts.get_stats(),
        history: alerts.get_history(limit),
    }))
}

/// Query parameters of `/alerts`
#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    timestamp: chrono::DateTime<chrono::Utc>,
    services: HashMap<String, ServiceStatus>,
}

#[derive(Debug, Serialize)]
struct TestAlertResponse {
    message: &'static str,
    success: bool,
    phone: String,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    service: String,
    result: CheckResult,
}

#[derive(Debug, Serialize)]
struct AlertsResponse {
    stats: AlertStats,
    history: Vec<Alert>,
}
