use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Layered settings: `appsettings.<env>` file, then `APP_`-prefixed
/// environment variables (`APP_LLM__API_KEY`, `APP_SERVER__PORT`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
    pub quiz: QuizSettings,
}

impl Settings {
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        Config::builder()
            .add_source(File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("quiz.allowed_difficulties")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub api_key: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            base_url: None,
            azure_endpoint: None,
            api_key: String::new(),
            chat_model: "gpt-4o-mini".to_string(),
            max_tokens: 1024,
            temperature: 0.2,
            timeout_secs: 60,
            max_retries: 0,
            retry_backoff_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
    pub timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 20,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub default_difficulty: String,
    pub allowed_difficulties: Vec<String>,
    pub max_context_chars: usize,
    pub chunk_chars: usize,
    pub max_chunks: usize,
    pub max_questions: usize,
    pub similarity_threshold: f64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_difficulty: "medium".to_string(),
            allowed_difficulties: Vec::new(),
            max_context_chars: 5000,
            chunk_chars: 500,
            max_chunks: 5,
            max_questions: 10,
            similarity_threshold: 0.8,
        }
    }
}
