//! src/email/mod.rs
use crate::configuration::{EmailSettings, TransportSettings};
use anyhow::Context;
use std::future::Future;

mod brevo;
pub use brevo::Brevo;

mod smtp;
pub use smtp::SmtpMailer;

/// A display name and address pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub name: String,
    pub email: String,
}

impl Mailbox {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A fully rendered HTML email, ready to be handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: Mailbox,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("`{address}` is not a deliverable email address")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("Failed to assemble the email")]
    Message(#[from] lettre::error::Error),
    #[error("The SMTP server did not accept the email")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("The email API did not accept the email")]
    Api(#[from] reqwest::Error),
}

/// Something that can hand an email over to a mail provider.
pub trait MailSender: Send + Sync {
    fn send(&self, email: &EmailMessage) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// The provider picked in the configuration.
#[derive(Debug, Clone)]
pub enum EmailClient {
    Smtp(SmtpMailer),
    Brevo(Brevo),
}

impl EmailClient {
    pub fn from_settings(settings: &EmailSettings) -> Result<Self, anyhow::Error> {
        let client = match &settings.transport {
            TransportSettings::Smtp(smtp) => Self::Smtp(
                SmtpMailer::new(smtp, settings.timeout())
                    .with_context(|| format!("Failed to set up the SMTP relay {}", smtp.host))?,
            ),
            TransportSettings::Brevo(brevo) => {
                let api_key = brevo
                    .api_key
                    .clone()
                    .context("The Brevo transport requires an API key (EMAIL_PASS)")?;
                Self::Brevo(
                    Brevo::new(brevo.api_url.clone(), api_key, settings.timeout())
                        .context("Failed to build the Brevo HTTP client")?,
                )
            }
        };

        Ok(client)
    }
}

impl MailSender for EmailClient {
    async fn send(&self, email: &EmailMessage) -> Result<(), DeliveryError> {
        match self {
            Self::Smtp(mailer) => mailer.send(email).await,
            Self::Brevo(brevo) => brevo.send(email).await,
        }
    }
}
