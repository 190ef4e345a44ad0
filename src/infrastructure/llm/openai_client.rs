use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::LlmSettings;

const AZURE_API_VERSION: &str = "2024-06-01";

/// Chat-completions client for OpenAI-compatible endpoints
/// (OpenAI, LM Studio, Azure OpenAI deployments).
pub struct OpenAiClient {
    client: Client,
    provider: Provider,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
    system_prompt_template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    OpenAi,
    LmStudio,
    Azure,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn from_settings(
        settings: &LlmSettings,
        system_prompt_template: String,
    ) -> Result<Self, LlmClientError> {
        let (provider, base_url) = match settings.provider.as_str() {
            "openai" => (
                Provider::OpenAi,
                settings
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            ),
            "lmstudio" => (
                Provider::LmStudio,
                settings.base_url.clone().ok_or_else(|| {
                    LlmClientError::Configuration(
                        "base_url required for lmstudio provider".to_string(),
                    )
                })?,
            ),
            "azure" => {
                let endpoint = settings.azure_endpoint.as_ref().ok_or_else(|| {
                    LlmClientError::Configuration(
                        "azure_endpoint required for azure provider".to_string(),
                    )
                })?;
                (
                    Provider::Azure,
                    format!(
                        "{}/openai/deployments/{}",
                        endpoint.trim_end_matches('/'),
                        settings.chat_model
                    ),
                )
            }
            other => {
                return Err(LlmClientError::Configuration(format!(
                    "unknown provider: {other}"
                )));
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| LlmClientError::Configuration(format!("http client: {e}")))?;

        Ok(Self {
            client,
            provider,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.chat_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            system_prompt_template,
        })
    }

    fn build_messages(&self, prompt: &str, context: &str) -> Vec<ChatMessage> {
        let system_content = self.system_prompt_template.replace("{context}", context);
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_content,
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            },
        ]
    }

    fn completions_url(&self) -> String {
        match self.provider {
            Provider::Azure => format!(
                "{}/chat/completions?api-version={}",
                self.base_url, AZURE_API_VERSION
            ),
            Provider::OpenAi | Provider::LmStudio => format!("{}/chat/completions", self.base_url),
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            Provider::Azure => request.header("api-key", &self.api_key),
            Provider::OpenAi | Provider::LmStudio => {
                request.header("Authorization", format!("Bearer {}", self.api_key))
            }
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip_all, fields(model = %self.model))]
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        tracing::debug!(
            prompt = %sanitize_prompt(prompt),
            context_chars = context.chars().count(),
            "Sending chat completion"
        );

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: self.build_messages(prompt, context),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let request = self.client.post(self.completions_url()).json(&request_body);
        let response = self.apply_auth(request).send().await.map_err(|e| {
            if e.is_timeout() {
                LlmClientError::Timeout(e.to_string())
            } else {
                LlmClientError::ApiRequestFailed(e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| LlmClientError::InvalidResponse("empty completion".to_string()))
    }
}
