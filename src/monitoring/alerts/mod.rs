//! Alert management system
//!
//! Renders alerts for outages, recoveries and monitor notices and delivers
//! them through the configured notification channels.

mod channels;
mod manager;
pub mod messages;
mod types;

pub use channels::{NotificationChannel, SlackChannel, WhatsAppChannel};
pub use manager::AlertManager;
pub use types::AlertStats;
