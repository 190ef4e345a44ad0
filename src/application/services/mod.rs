mod answer_matcher;
mod context_window;
mod output_parser;
mod prompts;
mod quiz_service;
mod retry;

pub use answer_matcher::{is_answer_correct, normalize_answer, similarity_ratio};
pub use context_window::{split_windows, truncate_chars};
pub use output_parser::{ModelOutput, parse_questions, parse_verdict};
pub use prompts::{DEFAULT_SYSTEM_PROMPT, answer_validation_prompt, question_generation_prompt};
pub use quiz_service::{QuizConfig, QuizError, QuizService};
pub use retry::RetryPolicy;
