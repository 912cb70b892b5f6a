//! src/email/smtp.rs
use super::{DeliveryError, EmailMessage, MailSender, Mailbox};
use crate::configuration::{SmtpSettings, TlsPolicy};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(
        settings: &SmtpSettings,
        timeout: Duration,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let builder = match settings.tls {
            TlsPolicy::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?,
            TlsPolicy::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            }
            TlsPolicy::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host),
        };

        let mut builder = builder.port(settings.port).timeout(Some(timeout));
        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                password.expose_secret().clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

impl MailSender for SmtpMailer {
    #[tracing::instrument(name = "Sending an email over SMTP", skip_all, fields(to = %email.to))]
    async fn send(&self, email: &EmailMessage) -> Result<(), DeliveryError> {
        let message = build_message(email)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

fn parse_address(address: &str) -> Result<Address, DeliveryError> {
    address
        .parse()
        .map_err(|source| DeliveryError::InvalidAddress {
            address: address.to_owned(),
            source,
        })
}

fn mailbox(mailbox: &Mailbox) -> Result<lettre::message::Mailbox, DeliveryError> {
    Ok(lettre::message::Mailbox::new(
        Some(mailbox.name.clone()),
        parse_address(&mailbox.email)?,
    ))
}

fn build_message(email: &EmailMessage) -> Result<Message, DeliveryError> {
    let mut builder = Message::builder()
        .from(mailbox(&email.from)?)
        .to(parse_address(&email.to)?.into())
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_HTML);

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(parse_address(reply_to)?.into());
    }

    Ok(builder.body(email.html.clone())?)
}
