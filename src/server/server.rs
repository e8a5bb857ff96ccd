//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::monitoring::MonitoringSystem;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{MonitorError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server around an existing monitoring system
    pub fn with_monitoring(config: &Config, monitoring: MonitoringSystem) -> Self {
        info!("Creating HTTP server");

        Self {
            config: config.server.clone(),
            state: AppState::new(monitoring),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let query_config = web::QueryConfig::default()
            .error_handler(|err, _req| MonitorError::bad_request(err.to_string()).into());

        App::new()
            .app_data(state)
            .app_data(query_config)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "monitor-api")))
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    }

    /// Start monitoring and serve HTTP until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let monitoring = self.state.monitoring.clone();
        monitoring.start().await?;

        let state = web::Data::new(self.state);
        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        let outcome = server
            .await
            .map_err(|e| MonitorError::server(format!("Server error: {}", e)));

        monitoring.stop();
        info!("HTTP server stopped");
        outcome
    }

    pub(super) fn format_bind_error(error: std::io::Error, bind_addr: &str) -> MonitorError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            MonitorError::server(format!(
                "Address {} is already in use; choose another port with --port or MONITOR_PORT",
                bind_addr
            ))
        } else {
            MonitorError::server(format!("Failed to bind {}: {}", bind_addr, error))
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
