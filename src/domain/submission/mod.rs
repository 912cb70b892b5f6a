//! src/domain/submission/mod.rs
mod email;
pub use email::SenderEmail;

mod text;
pub use text::RequiredText;

use serde::{Deserialize, Deserializer};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField,
    #[error("Invalid email format")]
    InvalidEmailFormat,
}

/// The contact form payload exactly as it arrived over the wire.
///
/// Every field is optional: a missing key, an explicit `null` and a value
/// that is not a JSON string all deserialize to `None`. A body that is not
/// a JSON object carries no fields at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl<'de> Deserialize<'de> for SubmissionInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = serde_json::Value::deserialize(deserializer)?;
        let Some(fields) = body.as_object() else {
            return Ok(Self::default());
        };

        let field = |key: &str| fields.get(key).and_then(|v| v.as_str()).map(str::to_owned);
        Ok(Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        })
    }
}

/// A submission whose four fields passed the presence and format checks.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: RequiredText,
    pub email: SenderEmail,
    pub subject: RequiredText,
    pub message: RequiredText,
}

impl ContactSubmission {
    pub fn parse(input: SubmissionInput) -> Result<Self, ValidationError> {
        let name = RequiredText::parse(input.name)?;
        let subject = RequiredText::parse(input.subject)?;
        let message = RequiredText::parse(input.message)?;

        // Last, so that a blank field elsewhere wins over a malformed address.
        let email = SenderEmail::parse(input.email)?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}
