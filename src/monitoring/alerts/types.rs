//! Alert types and data structures

use crate::monitoring::types::Alert;
use std::collections::{HashMap, VecDeque};

/// Number of alerts kept in history
pub(super) const MAX_HISTORY: usize = 1000;

/// Consolidated alert storage - single lock for related data
#[derive(Debug, Default)]
pub(super) struct AlertStorage {
    /// Alert history, oldest first
    pub history: VecDeque<Alert>,
    /// Alert statistics
    pub stats: AlertStats,
}

impl AlertStorage {
    /// Add an alert to history and statistics
    pub fn record(&mut self, alert: &Alert) {
        self.stats.total_alerts += 1;
        *self
            .stats
            .alerts_by_severity
            .entry(alert.severity.to_string())
            .or_insert(0) += 1;
        *self
            .stats
            .alerts_by_source
            .entry(alert.source.clone())
            .or_insert(0) += 1;
        self.stats.last_alert = Some(alert.timestamp);

        self.history.push_back(alert.clone());
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }
}

/// Alert statistics
#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct AlertStats {
    /// Total alerts raised
    pub total_alerts: u64,
    /// Alerts by severity
    pub alerts_by_severity: HashMap<String, u64>,
    /// Alerts by source
    pub alerts_by_source: HashMap<String, u64>,
    /// Successful channel deliveries
    pub delivered_notifications: u64,
    /// Failed channel deliveries
    pub failed_notifications: u64,
    /// Last alert timestamp
    pub last_alert: Option<chrono::DateTime<chrono::Utc>>,
}
