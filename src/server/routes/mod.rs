//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod health;
pub mod monitor;

use crate::utils::error::MonitorError;
use actix_web::{HttpRequest, HttpResponse, web};

/// Register every route of the API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    monitor::configure_routes(cfg);
}

/// Fallback for paths no route matches
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, MonitorError> {
    Err(MonitorError::not_found(format!(
        "Route not found: {} {}",
        req.method(),
        req.path()
    )))
}
