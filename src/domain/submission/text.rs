//! src/domain/submission/text.rs
use super::ValidationError;

/// A free-text form field that is non-empty once surrounding whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

/// Strips Unicode whitespace and the byte order mark from both ends.
pub(super) fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

impl RequiredText {
    pub fn parse(raw: Option<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_deref().map(trim_blank).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField);
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequiredText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
