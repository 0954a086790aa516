//! Greeting service: a minimal HTTP service with a liveness probe.
//!
//! Exposes `/healthz` for orchestration health checks and `/` which reports
//! the deployment environment and service version. Settings are read from the
//! process environment at startup.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::ServerError;
