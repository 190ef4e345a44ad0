use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_directives: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_override = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json || json_override,
            default_directives: format!("{},quizdoc=debug,tower_http=debug", logging.level),
        }
    }
}
