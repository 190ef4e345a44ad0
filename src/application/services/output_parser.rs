use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::domain::{Question, QuestionKind, Verdict};

use super::answer_matcher::is_answer_correct;

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[-*•]+|(?:q(?:uestion)?\s*)?\d{1,2}\s*[.):-]?)\s*").unwrap()
});

/// Model output after defensive parsing. Nothing the model returns reaches a
/// caller without passing through here.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput<T> {
    Parsed(T),
    Malformed(String),
}

impl<T> ModelOutput<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Parsed(value) => Ok(value),
            Self::Malformed(reason) => Err(reason),
        }
    }
}

pub fn parse_questions(raw: &str) -> ModelOutput<Vec<Question>> {
    // A bracket in prose can pass for JSON; plain lines still count then.
    let questions = extract_json(raw)
        .map(|value| well_formed(questions_from_json(value)))
        .filter(|questions| !questions.is_empty())
        .unwrap_or_else(|| well_formed(questions_from_lines(raw)));

    if questions.is_empty() {
        return ModelOutput::Malformed(format!(
            "no well-formed questions in model output ({} chars)",
            raw.trim().len()
        ));
    }

    ModelOutput::Parsed(questions)
}

pub fn parse_verdict(raw: &str, user_answer: &str, similarity_threshold: f64) -> ModelOutput<Verdict> {
    match extract_json(raw) {
        Some(Value::Bool(correct)) => ModelOutput::Parsed(Verdict::new(correct)),
        Some(Value::Object(fields)) => verdict_from_object(&fields, user_answer, similarity_threshold),
        Some(_) | None => verdict_from_text(raw),
    }
}

fn verdict_from_object(
    fields: &Map<String, Value>,
    user_answer: &str,
    similarity_threshold: f64,
) -> ModelOutput<Verdict> {
    let flag = ["correct", "is_correct", "isCorrect", "verdict"]
        .iter()
        .find_map(|key| fields.get(*key).and_then(truthiness));
    let correct_answer = first_string(fields, &["correct_answer", "expected_answer", "answer"]);
    let explanation = first_string(fields, &["explanation", "reason", "feedback"]);

    let correct = match (flag, &correct_answer) {
        (Some(flag), _) => flag,
        (None, Some(expected)) => is_answer_correct(user_answer, expected, similarity_threshold),
        (None, None) => {
            return ModelOutput::Malformed(
                "verdict object has neither a correctness flag nor a correct answer".to_string(),
            );
        }
    };

    ModelOutput::Parsed(Verdict {
        correct,
        correct_answer,
        explanation,
    })
}

fn verdict_from_text(raw: &str) -> ModelOutput<Verdict> {
    let trimmed = raw.trim();
    let (head, tail) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let head = head.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();

    let correct = match head.as_str() {
        "yes" | "correct" | "true" | "right" => true,
        "no" | "incorrect" | "false" | "wrong" => false,
        _ => {
            return ModelOutput::Malformed(format!(
                "unrecognised verdict text ({} chars)",
                trimmed.len()
            ));
        }
    };

    let explanation = tail
        .trim()
        .trim_start_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());

    ModelOutput::Parsed(Verdict {
        correct,
        correct_answer: None,
        explanation: (!explanation.is_empty()).then(|| explanation.to_string()),
    })
}

fn truthiness(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "true" | "correct" | "si" | "sí" => Some(true),
            "no" | "false" | "incorrect" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Finds a JSON document in model output: the whole text, a fenced block,
/// or the outermost array/object embedded in prose.
fn extract_json(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if !value.is_string() && !value.is_number() && !value.is_null() {
            return Some(value);
        }
    }

    [('[', ']'), ('{', '}')].iter().find_map(|(open, close)| {
        let start = trimmed.find(*open)?;
        let end = trimmed.rfind(*close)?;
        if end <= start {
            return None;
        }
        serde_json::from_str::<Value>(&trimmed[start..=end]).ok()
    })
}

fn questions_from_json(value: Value) -> Vec<Question> {
    match value {
        Value::Array(items) => items.into_iter().filter_map(question_from_value).collect(),
        Value::Object(mut fields) => match fields.remove("questions") {
            Some(inner) => questions_from_json(inner),
            None => question_from_value(Value::Object(fields)).into_iter().collect(),
        },
        _ => Vec::new(),
    }
}

fn question_from_value(value: Value) -> Option<Question> {
    match value {
        Value::String(text) => Some(Question::Plain(text.trim().to_string())),
        Value::Object(fields) => {
            let question = first_string(&fields, &["question", "text", "q"])?;
            let kind = ["type", "kind"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(first_text))
                .and_then(|label| QuestionKind::from_label(&label));
            let answers = ["answers", "options", "choices"]
                .iter()
                .find_map(|key| fields.get(*key).map(string_list))
                .unwrap_or_default();

            Some(Question::Structured {
                question,
                kind,
                answers,
            })
        }
        _ => None,
    }
}

fn well_formed(candidates: Vec<Question>) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(Question::is_well_formed)
        .collect()
}

fn questions_from_lines(raw: &str) -> Vec<Question> {
    raw.lines()
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .map(Question::Plain)
        .collect()
}

fn first_string(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| fields.get(*key).and_then(first_text))
        .filter(|s| !s.is_empty())
}

// Some models wrap scalars in single-element lists.
fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Array(items) => items.first().and_then(first_text),
        _ => None,
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}
