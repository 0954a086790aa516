//! Root endpoint: greets the caller and reports where the service runs.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::{GREETING_MESSAGE, SERVICE_VERSION};
use crate::state::AppState;

/// Body of a root response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub environment: String,
    pub version: &'static str,
}

impl Greeting {
    pub fn for_environment(environment: impl Into<String>) -> Self {
        Self {
            message: GREETING_MESSAGE,
            environment: environment.into(),
            version: SERVICE_VERSION,
        }
    }
}

/// Root handler. Also answers every path no other route claims.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Greeting> {
    Json(Greeting::for_environment(state.config.environment.as_str()))
}
