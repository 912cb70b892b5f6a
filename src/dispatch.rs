//! src/dispatch.rs
use crate::configuration::EmailSettings;
use crate::domain::{ContactSubmission, SubmissionInput, ValidationError};
use crate::email::{DeliveryError, EmailMessage, MailSender, Mailbox};
use crate::routes::error_chain_fmt;
use crate::templates::{render_confirmation, render_notification};

pub const NOTIFICATION_SUBJECT_PREFIX: &str = "New Contact Form Submission";
pub const CONFIRMATION_SUBJECT: &str = "Thank you for reaching out!";

/// Who the two emails come from and where the owner's copy goes.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub sender_email: String,
    pub notification_sender_name: String,
    pub confirmation_sender_name: String,
    pub recipient_email: String,
}

impl From<&EmailSettings> for DispatchSettings {
    fn from(settings: &EmailSettings) -> Self {
        Self {
            sender_email: settings.sender_email.clone(),
            notification_sender_name: settings.notification_sender_name.clone(),
            confirmation_sender_name: settings.confirmation_sender_name.clone(),
            recipient_email: settings.recipient_email.clone(),
        }
    }
}

#[derive(thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to send email. Please try again later.")]
    Delivery(#[source] DeliveryError),
}

impl std::fmt::Debug for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Validates a submission, then sends the owner notification followed by
/// the visitor confirmation.
///
/// The first delivery failure stops the flow. A notification that already
/// went out is not taken back.
#[tracing::instrument(
    name = "Dispatching a contact form submission",
    skip(input, mail_sender, settings),
    fields(sender_email = tracing::field::Empty)
)]
pub async fn handle_submission<M>(
    input: SubmissionInput,
    mail_sender: &M,
    settings: &DispatchSettings,
) -> Result<(), DispatchError>
where
    M: MailSender,
{
    let submission = ContactSubmission::parse(input)?;
    tracing::Span::current().record("sender_email", tracing::field::display(&submission.email));

    let notification = notification_email(&submission, settings);
    send(mail_sender, &notification, "notification").await?;

    let confirmation = confirmation_email(&submission, settings);
    send(mail_sender, &confirmation, "confirmation").await?;

    Ok(())
}

async fn send<M>(mail_sender: &M, email: &EmailMessage, kind: &str) -> Result<(), DispatchError>
where
    M: MailSender,
{
    mail_sender.send(email).await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to send the {} email", kind
        );
        DispatchError::Delivery(e)
    })
}

pub fn notification_email(submission: &ContactSubmission, settings: &DispatchSettings) -> EmailMessage {
    let html = render_notification(
        submission.name.as_ref(),
        submission.email.as_ref(),
        submission.subject.as_ref(),
        submission.message.as_ref(),
    );

    EmailMessage {
        from: Mailbox::new(&settings.notification_sender_name, &settings.sender_email),
        to: settings.recipient_email.clone(),
        subject: format!("{}: {}", NOTIFICATION_SUBJECT_PREFIX, submission.subject),
        html,
        reply_to: Some(submission.email.to_string()),
    }
}

pub fn confirmation_email(submission: &ContactSubmission, settings: &DispatchSettings) -> EmailMessage {
    let html = render_confirmation(submission.name.as_ref(), submission.subject.as_ref());

    EmailMessage {
        from: Mailbox::new(&settings.confirmation_sender_name, &settings.sender_email),
        to: submission.email.to_string(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        html,
        reply_to: None,
    }
}
