//! HTTP response handling for errors

use super::types::MonitorError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl MonitorError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MonitorError::Config(_) => "CONFIG_ERROR",
            MonitorError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            MonitorError::Serialization(_) | MonitorError::Yaml(_) => "SERIALIZATION_ERROR",
            MonitorError::Io(_) => "IO_ERROR",
            MonitorError::Validation(_) => "VALIDATION_ERROR",
            MonitorError::BadRequest(_) => "BAD_REQUEST",
            MonitorError::NotFound(_) => "NOT_FOUND",
            MonitorError::Notification(_) => "NOTIFICATION_ERROR",
            MonitorError::Server(_) | MonitorError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for MonitorError {
    fn status_code(&self) -> StatusCode {
        match self {
            MonitorError::NotFound(_) => StatusCode::NOT_FOUND,
            MonitorError::Validation(_) | MonitorError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MonitorError::Notification(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            MonitorError::NotFound(_)
            | MonitorError::Validation(_)
            | MonitorError::BadRequest(_)
            | MonitorError::Notification(_) => self.to_string(),
            _ => "An internal error occurred".to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: message,
            code: self.error_code().to_string(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
