use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::QuizError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl QuizError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFile(_) => "InvalidFileError",
            Self::InvalidInput(_) => "InvalidInputError",
            Self::PayloadTooLarge(_) => "PayloadTooLargeError",
            Self::UpstreamGeneration(_) => "UpstreamGenerationError",
            Self::UpstreamValidation(_) => "UpstreamValidationError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFile(_) => StatusCode::BAD_REQUEST,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UpstreamGeneration(_) | Self::UpstreamValidation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed upstream");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.kind(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
