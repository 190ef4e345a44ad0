use async_trait::async_trait;

/// Text completion against an external language model.
///
/// `prompt` carries the instruction, `context` the document text the
/// instruction is grounded on.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("misconfigured client: {0}")]
    Configuration(String),
}

impl LlmClientError {
    /// Transport trouble is worth another attempt; a bad payload is not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ApiRequestFailed(_) | Self::Timeout(_) | Self::RateLimited
        )
    }
}
