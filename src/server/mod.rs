//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod routes;

pub mod builder;
pub mod server;
pub mod state;


pub use builder::{RunOptions, ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
