mod difficulty;
mod document;
mod question;
mod verdict;

pub use difficulty::{Difficulty, DifficultyError};
pub use document::{ContentType, Document, DocumentId};
pub use question::{Question, QuestionKind};
pub use verdict::Verdict;
