//! Configuration resolution and constants.
//!
//! Service settings come from the process environment: `PORT` selects the
//! listen port and `ENVIRONMENT` names the deployment. Both fall back to a
//! default when unset or empty. `AppConfig` holds the resolved values.

use std::fmt;

// =============================================================================
// Environment Variables
// =============================================================================

/// Variable holding the listen port
pub const PORT_VAR: &str = "PORT";

/// Variable holding the deployment environment label
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Variable selecting the log output format (text or json)
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: &str = "8080";

/// Environment label used when `ENVIRONMENT` is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Listen on all interfaces
pub const LISTEN_HOST: &str = "0.0.0.0";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "greeting_service=info";

// =============================================================================
// Response Literals
// =============================================================================

/// Greeting returned by the root endpoint. The placeholder is literal data.
pub const GREETING_MESSAGE: &str = "Hello from {{CUSTOMER_NAME}}!";

/// Version reported by the root endpoint
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status reported by the health endpoint
pub const HEALTHY_STATUS: &str = "healthy";

/// Health responses must never be served from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen port, kept as given. An invalid value fails at bind time.
    pub port: String,
    /// Deployment environment label echoed by the root endpoint
    pub environment: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: non_empty_or(lookup(PORT_VAR), DEFAULT_PORT),
            environment: non_empty_or(lookup(ENVIRONMENT_VAR), DEFAULT_ENVIRONMENT),
        }
    }

    /// Address string for the listener, covering all interfaces.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", LISTEN_HOST, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, "8080");
        assert_eq!(config.environment, "development");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", ""), ("ENVIRONMENT", "")]));
        assert_eq!(config.port, "8080");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_values_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("ENVIRONMENT", "staging"),
        ]));
        assert_eq!(config.port, "9090");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.listen_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_non_numeric_port_passes_through() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "http")]));
        assert_eq!(config.port, "http");
        assert_eq!(config.listen_addr(), "0.0.0.0:http");
    }

    #[test]
    fn test_whitespace_environment_is_kept() {
        let config = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", " ")]));
        assert_eq!(config.environment, " ");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" TEXT "), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse("yaml"), None);
        assert_eq!(LogFormat::default().to_string(), "text");
    }
}
