//! HTTP server module.
//!
//! Binds the listener on all interfaces and serves the router until a
//! shutdown signal arrives:
//! - SIGTERM/SIGINT: graceful shutdown with connection draining

mod server;
mod shutdown;

pub use server::{bind_listener, serve, start_server};
pub use shutdown::shutdown_signal;
