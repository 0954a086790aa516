//! HTTP server startup logic.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::error::ServerError;
use crate::routes::create_router;
use crate::state::AppState;

use super::shutdown;

/// Start the HTTP server for the given configuration.
///
/// Logs the resolved settings, binds `0.0.0.0:<port>` and blocks until a
/// shutdown signal drains the server. A bind failure is returned immediately;
/// there is no retry and no fallback port.
pub async fn start_server(config: AppConfig) -> Result<(), ServerError> {
    tracing::info!(port = %config.port, "Starting server on port {}", config.port);
    tracing::info!(environment = %config.environment, "Environment: {}", config.environment);

    let listener = bind_listener(&config).await?;
    let app = create_router(AppState::new(config));

    serve(listener, app, shutdown::shutdown_signal()).await
}

/// Bind the listener on all interfaces at the configured port.
pub async fn bind_listener(config: &AppConfig) -> Result<TcpListener, ServerError> {
    let addr = config.listen_addr();
    let bound = TcpListener::bind(addr.as_str()).await;
    let listener = bound.map_err(|source| ServerError::Bind { addr, source })?;

    if let Ok(local) = listener.local_addr() {
        tracing::info!(%local, "Listening");
    }
    Ok(listener)
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight
/// requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
