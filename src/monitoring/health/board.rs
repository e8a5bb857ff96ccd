//! Latest probe result per service

use crate::config::ServiceConfig;
use crate::monitoring::types::{CheckResult, ServiceStatus};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory map of service id to its latest status
#[derive(Debug, Default)]
pub struct StatusBoard {
    entries: RwLock<HashMap<String, ServiceStatus>>,
}

impl StatusBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome of a probe, replacing any previous entry
    pub fn record(&self, service: &ServiceConfig, result: &CheckResult) -> ServiceStatus {
        let status = ServiceStatus {
            name: service.name.clone(),
            url: service.url.clone(),
            status: result.status,
            last_check: chrono::Utc::now(),
            response_time: result.response_time,
            error_message: result.error_message.clone(),
        };

        self.entries
            .write()
            .insert(service.id.clone(), status.clone());

        status
    }

    /// Latest status of one service
    pub fn get(&self, id: &str) -> Option<ServiceStatus> {
        self.entries.read().get(id).cloned()
    }

    /// Copy of every entry
    pub fn snapshot(&self) -> HashMap<String, ServiceStatus> {
        self.entries.read().clone()
    }

    /// Number of services with at least one completed probe
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no probe has completed yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
