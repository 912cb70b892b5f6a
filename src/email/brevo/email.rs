//! src/email/brevo/email.rs
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Contact<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub email: &'a str,
}

impl<'a> Contact<'a> {
    pub fn new(email: &'a str) -> Self {
        Self { name: None, email }
    }

    pub fn named(name: &'a str, email: &'a str) -> Self {
        Self {
            name: Some(name),
            email,
        }
    }
}

/// Request body of Brevo's transactional email endpoint.
#[derive(Debug, Serialize)]
pub struct Email<'a> {
    sender: Contact<'a>,
    pub to: Vec<Contact<'a>>,
    #[serde(rename = "replyTo", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Contact<'a>>,
    pub subject: &'a str,
    #[serde(rename = "htmlContent")]
    pub html_content: &'a str,
}

pub struct EmailBuilder<'a> {
    sender: Contact<'a>,
    to: Vec<Contact<'a>>,
    reply_to: Option<Contact<'a>>,
    subject: &'a str,
    html_content: &'a str,
}

impl<'a> EmailBuilder<'a> {
    pub fn new(sender: Contact<'a>) -> Self {
        Self {
            sender,
            to: vec![],
            reply_to: None,
            subject: "",
            html_content: "",
        }
    }

    pub fn to(mut self, contact: Contact<'a>) -> Self {
        self.to.push(contact);
        self
    }

    pub fn reply_to(mut self, contact: Contact<'a>) -> Self {
        self.reply_to = Some(contact);
        self
    }

    pub fn subject(mut self, subject: &'a str) -> Self {
        self.subject = subject;
        self
    }

    pub fn html_content(mut self, html_content: &'a str) -> Self {
        self.html_content = html_content;
        self
    }

    pub fn build(self) -> Email<'a> {
        Email {
            sender: self.sender,
            to: self.to,
            reply_to: self.reply_to,
            subject: self.subject,
            html_content: self.html_content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub http_client: Client,
    pub url: String,
    pub api_key: Secret<String>,
}

impl ApiClient {
    pub async fn send_email<T>(&self, email: &T) -> Result<reqwest::Response, reqwest::Error>
    where
        T: Serialize,
    {
        let res = self
            .http_client
            .post(&self.url)
            .header("api-key", self.api_key.expose_secret())
            .header("accept", "application/json")
            .json(&email)
            .send()
            .await?
            .error_for_status()?;

        Ok(res)
    }
}
