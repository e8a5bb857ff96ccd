//! Error handling for the monitor
//!
//! This module defines the error type used throughout the crate and its
//! mapping to HTTP responses.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{MonitorError, Result};
