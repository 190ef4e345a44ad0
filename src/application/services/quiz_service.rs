use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient};
use crate::domain::{Difficulty, DifficultyError, Document, Question, Verdict};

use super::context_window::{split_windows, truncate_chars};
use super::output_parser::{ModelOutput, parse_questions, parse_verdict};
use super::prompts::{answer_validation_prompt, question_generation_prompt};
use super::retry::RetryPolicy;

#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub max_context_chars: usize,
    pub chunk_chars: usize,
    pub max_chunks: usize,
    pub max_questions: usize,
    pub similarity_threshold: f64,
    pub allowed_difficulties: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_context_chars: 5000,
            chunk_chars: 500,
            max_chunks: 5,
            max_questions: 10,
            similarity_threshold: 0.8,
            allowed_difficulties: Vec::new(),
        }
    }
}

/// Stateless orchestration of one quiz request: extract, prompt, parse.
pub struct QuizService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    config: QuizConfig,
    retry_policy: RetryPolicy,
}

impl<F, L> QuizService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        config: QuizConfig,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            config,
            retry_policy,
        }
    }

    #[tracing::instrument(
        skip(self, data, document),
        fields(document_id = %document.id.as_uuid(), difficulty = %difficulty)
    )]
    pub async fn generate_questions(
        &self,
        document: &Document,
        data: &[u8],
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, QuizError> {
        Self::ensure_pdf(document, data)?;
        let difficulty = difficulty.ensure_allowed(&self.config.allowed_difficulties)?;
        let context = self.load_context(document, data).await?;
        let prompt = question_generation_prompt(&difficulty);

        let windows = split_windows(&context, self.config.chunk_chars, self.config.max_chunks);
        let mut seen = HashSet::new();
        let mut questions = Vec::new();

        for (index, window) in windows.iter().enumerate() {
            let raw = self
                .retry_policy
                .run("generate_questions", || self.llm_client.complete(&prompt, window))
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, window = index, "Question generation call failed");
                    QuizError::UpstreamGeneration(e.to_string())
                })?;

            match parse_questions(&raw) {
                ModelOutput::Parsed(parsed) => {
                    tracing::debug!(window = index, count = parsed.len(), "Parsed model questions");
                    for question in parsed {
                        if seen.insert(question.text().trim().to_lowercase()) {
                            questions.push(question);
                        }
                    }
                }
                ModelOutput::Malformed(reason) => {
                    tracing::warn!(window = index, reason = %reason, "Discarding malformed model output");
                }
            }

            if questions.len() >= self.config.max_questions {
                break;
            }
        }

        if questions.is_empty() {
            return Err(QuizError::UpstreamGeneration(
                "model output contained no well-formed questions".to_string(),
            ));
        }

        questions.truncate(self.config.max_questions);
        tracing::info!(count = questions.len(), "Questions generated");

        Ok(questions)
    }

    #[tracing::instrument(skip_all, fields(document_id = %document.id.as_uuid()))]
    pub async fn validate_answer(
        &self,
        document: &Document,
        data: &[u8],
        question: &str,
        user_answer: &str,
    ) -> Result<Verdict, QuizError> {
        Self::ensure_pdf(document, data)?;

        let question = question.trim();
        let user_answer = user_answer.trim();
        if question.is_empty() || user_answer.is_empty() {
            return Err(QuizError::InvalidInput(
                "question and user_answer are required".to_string(),
            ));
        }

        let context = self.load_context(document, data).await?;
        let prompt = answer_validation_prompt(question, user_answer);

        let raw = self
            .retry_policy
            .run("validate_answer", || self.llm_client.complete(&prompt, &context))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Answer validation call failed");
                QuizError::UpstreamValidation(e.to_string())
            })?;

        let verdict = parse_verdict(&raw, user_answer, self.config.similarity_threshold)
            .into_result()
            .map_err(|reason| {
                tracing::warn!(reason = %reason, "Malformed verdict from model");
                QuizError::UpstreamValidation(reason)
            })?;

        tracing::info!(correct = verdict.correct, "Answer validated");

        Ok(verdict)
    }

    fn ensure_pdf(document: &Document, data: &[u8]) -> Result<(), QuizError> {
        if data.is_empty() {
            return Err(QuizError::InvalidFile("uploaded file is empty".to_string()));
        }
        if !document.is_pdf() {
            return Err(QuizError::InvalidFile(format!(
                "{} is not a valid PDF",
                document.filename
            )));
        }
        Ok(())
    }

    async fn load_context(&self, document: &Document, data: &[u8]) -> Result<String, QuizError> {
        let text = self.file_loader.extract_text(data, document).await?;
        let context = truncate_chars(text.trim(), self.config.max_context_chars).trim_end();

        if context.is_empty() {
            return Err(QuizError::InvalidFile(format!(
                "no extractable text found in {}",
                document.filename
            )));
        }

        tracing::debug!(chars = context.chars().count(), "Document context ready");
        Ok(context.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid file: {0}")]
    InvalidFile(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("upload too large: {0}")]
    PayloadTooLarge(String),
    #[error("question generation failed: {0}")]
    UpstreamGeneration(String),
    #[error("answer validation failed: {0}")]
    UpstreamValidation(String),
}

impl From<FileLoaderError> for QuizError {
    fn from(e: FileLoaderError) -> Self {
        Self::InvalidFile(e.to_string())
    }
}

impl From<DifficultyError> for QuizError {
    fn from(e: DifficultyError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
