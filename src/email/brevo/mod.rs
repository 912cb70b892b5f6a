//! src/email/brevo/mod.rs
use super::{DeliveryError, EmailMessage, MailSender};
use reqwest::Client;
use secrecy::Secret;
use std::time::Duration;

mod email;
use email::{ApiClient, Contact, EmailBuilder};

/// Delivers through Brevo's transactional email HTTP API.
#[derive(Debug, Clone)]
pub struct Brevo {
    api_client: ApiClient,
}

impl Brevo {
    pub fn new(
        api_url: String,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_client: ApiClient {
                http_client,
                url: api_url,
                api_key,
            },
        })
    }
}

impl MailSender for Brevo {
    #[tracing::instrument(name = "Sending an email through Brevo", skip_all, fields(to = %email.to))]
    async fn send(&self, email: &EmailMessage) -> Result<(), DeliveryError> {
        let sender = Contact::named(&email.from.name, &email.from.email);
        let mut builder = EmailBuilder::new(sender)
            .to(Contact::new(&email.to))
            .subject(&email.subject)
            .html_content(&email.html);
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(Contact::new(reply_to));
        }

        self.api_client.send_email(&builder.build()).await?;
        Ok(())
    }
}
