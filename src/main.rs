//! Greeting service entry point.
//!
//! Initializes tracing, resolves configuration from the environment, and runs
//! the HTTP server until it is shut down or fails to bind.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_service::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, LOG_FORMAT_VAR};
use greeting_service::http::start_server;

/// Greeting service: health probe and environment greeting over HTTP
#[derive(Parser, Debug)]
#[command(name = "greeting-service", version, about)]
struct Args {
    /// Log level filter (e.g., "greeting_service=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format [default: text, or LOG_FORMAT]
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn init_tracing(args: &Args) {
    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let log_format = args
        .log_format
        .or_else(|| {
            std::env::var(LOG_FORMAT_VAR)
                .ok()
                .and_then(|name| LogFormat::parse(&name))
        })
        .unwrap_or_default();

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    match log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    let config = AppConfig::from_env();

    match start_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
