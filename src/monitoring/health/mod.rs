//! Health checking system
//!
//! Probing of monitored services, per-service failure tracking and the
//! in-memory board of latest results.

mod board;
mod checker;
mod tracker;


pub use board::StatusBoard;
pub use checker::HealthChecker;
pub use tracker::{FailureTracker, Transition};
