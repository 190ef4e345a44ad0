use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Mcq,
    YesNo,
    ShortAnswer,
}

impl QuestionKind {
    /// Lenient label matching; models rarely agree on spelling.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match normalized.as_str() {
            "mcq" | "multiplechoice" | "choice" => Some(Self::Mcq),
            "yesno" | "sino" | "síno" | "boolean" | "truefalse" => Some(Self::YesNo),
            "shortanswer" | "short" | "open" | "respuestacorta" => Some(Self::ShortAnswer),
            _ => None,
        }
    }
}

/// A generated question. The model decides the shape: plain strings stay
/// plain, structured entries keep their kind and candidate answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Question {
    Plain(String),
    Structured {
        question: String,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<QuestionKind>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        answers: Vec<String>,
    },
}

impl Question {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Structured { question, .. } => question,
        }
    }

    /// Only well-formed interrogatives are kept.
    pub fn is_well_formed(&self) -> bool {
        let text = self.text().trim();
        text.len() > 1 && text.ends_with('?')
    }
}
