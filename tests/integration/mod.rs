//! Integration test modules

mod alert_delivery_tests;
mod api_tests;
mod monitoring_cycle_tests;
