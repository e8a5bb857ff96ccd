//! Core health checker implementation

use crate::config::ServiceConfig;
use crate::monitoring::types::CheckResult;
use crate::utils::error::Result;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;

/// Maximum redirects followed by a probe
const MAX_REDIRECTS: usize = 10;

/// Probes service health endpoints over HTTP
#[derive(Debug, Clone)]
pub struct HealthChecker {
    /// Shared client, pooled across all services
    client: reqwest::Client,
    /// Per-request timeout
    timeout: Duration,
}

impl HealthChecker {
    /// Create a new health checker
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("monitor-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe one service
    ///
    /// Failures are reported in the returned [`CheckResult`], never as an
    /// error.
    pub async fn check(&self, service: &ServiceConfig) -> CheckResult {
        debug!("Checking {} ({})", service.name, service.url);

        let start_time = Instant::now();
        let outcome = self.client.get(&service.url).send().await;
        let response_time = start_time.elapsed().as_secs_f64();

        match outcome {
            Ok(response) if response.status() == StatusCode::OK => {
                CheckResult::online(response_time)
            }
            Ok(response) => {
                CheckResult::error(response_time, format!("HTTP {}", response.status().as_u16()))
            }
            Err(e) => classify_failure(&e, response_time),
        }
    }
}

/// Map a transport failure to an offline result
fn classify_failure(error: &reqwest::Error, response_time: f64) -> CheckResult {
    if error.is_timeout() {
        CheckResult::offline(response_time, "Timeout - service did not respond")
    } else if error.is_connect() {
        CheckResult::offline(response_time, "Connection error - service offline")
    } else {
        CheckResult::offline(response_time, format!("Error: {}", error))
    }
}
