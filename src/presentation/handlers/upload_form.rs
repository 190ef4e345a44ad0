use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;

use crate::application::services::QuizError;
use crate::domain::{ContentType, Document};

pub const FILE_FIELD: &str = "file";

pub struct UploadedFile {
    pub document: Document,
    pub data: Bytes,
}

/// Multipart body with its `file` part and any text fields.
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    pub async fn read(multipart: Result<Multipart, MultipartRejection>) -> Result<Self, QuizError> {
        let mut multipart = multipart.map_err(|e| {
            QuizError::InvalidFile(format!("expected a multipart/form-data upload: {e}"))
        })?;

        let mut file = None;
        let mut fields = HashMap::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "failed to read multipart"))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILE_FIELD {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let declared = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "failed to read file"))?;

                let document = Document::from_upload(filename, &data);
                if document.content_type == ContentType::Pdf
                    && ContentType::from_mime(&declared).is_none()
                {
                    tracing::debug!(declared = %declared, "PDF uploaded with a non-PDF content type");
                }

                tracing::debug!(
                    filename = %document.filename,
                    bytes = data.len(),
                    content_type = %document.content_type.as_mime(),
                    "File data received"
                );

                file = Some(UploadedFile { document, data });
            } else if !name.is_empty() {
                let value = field.text().await.map_err(|e| {
                    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        multipart_error(e, "failed to read field")
                    } else {
                        QuizError::InvalidInput(format!("failed to read field '{name}': {e}"))
                    }
                })?;
                fields.insert(name, value);
            }
        }

        Ok(Self { file, fields })
    }

    pub fn require_file(&mut self) -> Result<UploadedFile, QuizError> {
        self.file
            .take()
            .ok_or_else(|| QuizError::InvalidFile("no file uploaded".to_string()))
    }

    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|v| !v.trim().is_empty())
    }
}

/// Body-limit failures keep their 413; anything else is a broken upload.
fn multipart_error(e: MultipartError, context: &str) -> QuizError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %e, "Upload exceeds the body limit");
        return QuizError::PayloadTooLarge(format!("{context}: {}", e.body_text()));
    }

    tracing::error!(error = %e, "Failed to read multipart");
    QuizError::InvalidFile(format!("{context}: {e}"))
}
