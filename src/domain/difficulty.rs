use std::fmt;

/// Requested question difficulty. Open-ended by default; the caller may
/// narrow it with [`Difficulty::ensure_allowed`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Difficulty(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DifficultyError {
    #[error("difficulty must not be empty")]
    Empty,
    #[error("unsupported difficulty '{value}', expected one of: {allowed}")]
    NotAllowed { value: String, allowed: String },
}

impl Difficulty {
    pub fn parse(raw: &str) -> Result<Self, DifficultyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DifficultyError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn ensure_allowed(self, allowed: &[String]) -> Result<Self, DifficultyError> {
        if allowed.is_empty() || allowed.iter().any(|a| a.eq_ignore_ascii_case(&self.0)) {
            return Ok(self);
        }
        Err(DifficultyError::NotAllowed {
            value: self.0,
            allowed: allowed.join(", "),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
