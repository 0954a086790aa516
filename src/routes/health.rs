//! Health check endpoint for container orchestration.
//!
//! A liveness probe that returns 200 with a JSON status whenever the process
//! can answer HTTP. Used by Kubernetes, load balancers and the like.

use axum::Json;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::config::HEALTHY_STATUS;

/// Body of a health response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Time the response was built, RFC 3339 with second precision
    pub timestamp: String,
}

impl HealthStatus {
    /// Builds a status stamped with the current local time.
    pub fn now() -> Self {
        Self {
            status: HEALTHY_STATUS,
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Health check handler. Served for every method.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_timestamp_is_rfc3339_and_current() {
        let status = HealthStatus::now();
        assert_eq!(status.status, "healthy");

        let parsed = DateTime::parse_from_rfc3339(&status.timestamp).unwrap();
        let skew = (Utc::now() - parsed.with_timezone(&Utc)).num_seconds().abs();
        assert!(skew <= 2, "timestamp {} too far from now", status.timestamp);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(HealthStatus::now()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["status"], "healthy");
        assert!(object["timestamp"].is_string());
    }
}
