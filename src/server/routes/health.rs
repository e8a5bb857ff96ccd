//! Health check and service information endpoints

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health and information routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Root endpoint
///
/// Describes the monitor and where alerts are delivered.
pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    let config = state.config();

    HttpResponse::Ok().json(RootInfo {
        message: config.monitor.name.clone(),
        services: config.monitor.services.len(),
        status: Cow::Borrowed("running"),
        evolution_api: config.alerting.whatsapp.api_url.clone(),
        instance: config.alerting.whatsapp.instance.clone(),
    })
}

/// Basic health check endpoint
///
/// Reports that the monitor itself is up, independent of the services it
/// watches.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("ok"),
        timestamp: crate::utils::current_timestamp_millis(),
        services_monitored: state.config().monitor.services.len(),
    })
}

/// Version information endpoint
pub async fn version_info(state: web::Data<AppState>) -> HttpResponse {
    let info = crate::build_info();

    HttpResponse::Ok().json(VersionInfo {
        version: Cow::Borrowed(info.version),
        build_time: Cow::Borrowed(info.build_time),
        git_hash: Cow::Borrowed(info.git_hash),
        rust_version: Cow::Borrowed(info.rust_version),
        uptime_seconds: state.monitoring.uptime_seconds(),
    })
}

#[derive(Debug, Clone, Serialize)]
struct RootInfo {
    message: String,
    services: usize,
    status: Cow<'static, str>,
    evolution_api: String,
    instance: String,
}

#[derive(Debug, Clone, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    /// Milliseconds since the Unix epoch
    timestamp: i64,
    services_monitored: usize,
}

#[derive(Debug, Clone, Serialize)]
struct VersionInfo {
    version: Cow<'static, str>,
    build_time: Cow<'static, str>,
    git_hash: Cow<'static, str>,
    rust_version: Cow<'static, str>,
    uptime_seconds: u64,
}
