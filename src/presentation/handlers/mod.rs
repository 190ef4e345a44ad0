mod error;
mod generate_questions;
mod health;
mod upload_form;
mod validate_answers;

pub use error::ErrorResponse;
pub use generate_questions::{GenerateQuestionsResponse, generate_questions_handler};
pub use health::{health_handler, welcome_handler};
pub use upload_form::{UploadForm, UploadedFile};
pub use validate_answers::{
    ValidateAnswersQuery, ValidateAnswersResponse, validate_answers_handler,
};
