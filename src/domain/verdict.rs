use serde::Serialize;

/// Judgement of a user's answer against the document context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Verdict {
    pub fn new(correct: bool) -> Self {
        Self {
            correct,
            correct_answer: None,
            explanation: None,
        }
    }
}
