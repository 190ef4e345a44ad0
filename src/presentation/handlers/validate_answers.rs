use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::QuizError;
use crate::domain::Verdict;
use crate::presentation::state::AppState;

use super::upload_form::UploadForm;

/// Older clients send the question and answer in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateAnswersQuery {
    pub question: Option<String>,
    pub user_answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateAnswersResponse {
    pub question: String,
    pub user_answer: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// `POST /validate_answers`: multipart `file`, `question`, `user_answer`.
#[tracing::instrument(skip(state, query, multipart))]
pub async fn validate_answers_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Query(query): Query<ValidateAnswersQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, QuizError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let mut form = UploadForm::read(multipart).await?;
    let upload = form.require_file()?;

    let question = form
        .take_field("question")
        .or(query.question)
        .unwrap_or_default();
    let user_answer = form
        .take_field("user_answer")
        .or(query.user_answer)
        .unwrap_or_default();

    let verdict = state
        .quiz_service
        .validate_answer(&upload.document, &upload.data, &question, &user_answer)
        .await?;

    Ok(Json(ValidateAnswersResponse {
        question: question.trim().to_string(),
        user_answer: user_answer.trim().to_string(),
        verdict,
    }))
}
