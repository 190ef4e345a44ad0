use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::QuizService;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub quiz_service: Arc<QuizService<F, L>>,
    pub default_difficulty: String,
    pub max_upload_bytes: usize,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            quiz_service: Arc::clone(&self.quiz_service),
            default_difficulty: self.default_difficulty.clone(),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
