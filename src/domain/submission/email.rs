//! src/domain/submission/email.rs
use super::text::trim_blank;
use super::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld with no whitespace, no byte order mark and exactly one `@`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email shape pattern must compile")
});

/// The visitor's address: present, and shaped like `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderEmail(String);

impl SenderEmail {
    /// Blank input is reported as a missing field, not as a bad address.
    /// The shape check runs on the raw value, so surrounding whitespace fails it.
    pub fn parse(raw: Option<String>) -> Result<Self, ValidationError> {
        let raw = raw.unwrap_or_default();
        if trim_blank(&raw).is_empty() {
            return Err(ValidationError::MissingField);
        }

        if EMAIL_SHAPE.is_match(&raw) {
            Ok(Self(raw))
        } else {
            Err(ValidationError::InvalidEmailFormat)
        }
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
