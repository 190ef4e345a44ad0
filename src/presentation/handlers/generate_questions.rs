use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::QuizError;
use crate::domain::{Difficulty, Question};
use crate::presentation::state::AppState;

use super::upload_form::UploadForm;

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}

/// `POST /generate_questions`: multipart `file` plus optional `difficulty`.
#[tracing::instrument(skip(state, multipart))]
pub async fn generate_questions_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, QuizError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let mut form = UploadForm::read(multipart).await?;
    let upload = form.require_file()?;

    let raw_difficulty = form
        .take_field("difficulty")
        .unwrap_or_else(|| state.default_difficulty.clone());
    let difficulty = Difficulty::parse(&raw_difficulty)?;

    let questions = state
        .quiz_service
        .generate_questions(&upload.document, &upload.data, difficulty)
        .await?;

    Ok(Json(GenerateQuestionsResponse { questions }))
}
