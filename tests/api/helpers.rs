//! tests/api/helpers.rs

use contact_form::configuration::{get_configuration, BrevoSettings, TransportSettings};
use contact_form::startup::build;
use contact_form::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test| bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub const EMAIL_API_PATH: &str = "/v3/smtp/email";
pub const RECIPIENT_EMAIL: &str = "owner@example.com";
pub const SENDER_EMAIL: &str = "contact-form@example.com";
pub const ALLOWED_ORIGIN: &str = "https://portfolio.example.com";

pub struct Test {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_as_text(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", self.address))
            .header("Content-Type", "text/plain")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_from(
        &self,
        origin: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", self.address))
            .header("Origin", origin)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Every email handed to the provider, in the order it arrived.
    pub async fn received_emails(&self) -> Vec<Email> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Failed to parse email"))
            .collect()
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    // Start email server
    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.application.allowed_origins = vec![ALLOWED_ORIGIN.to_string()];
    config.email.sender_email = SENDER_EMAIL.to_string();
    config.email.recipient_email = RECIPIENT_EMAIL.to_string();
    config.email.timeout_milliseconds = 2_000;
    config.email.transport = TransportSettings::Brevo(BrevoSettings {
        api_url: format!("{}{}", email_server.uri(), EMAIL_API_PATH),
        api_key: Some(Secret::new("test-api-key".to_string())),
    });

    // Launch the server
    let app = build(config.clone()).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    Test {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "John Doe",
        "email": "john@example.com",
        "subject": "Test Subject",
        "message": "Test message content",
    })
}

#[derive(serde::Deserialize, Debug)]
pub struct Party {
    pub name: Option<String>,
    pub email: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct Email {
    pub sender: Party,
    pub to: Vec<Party>,
    #[serde(rename = "replyTo")]
    pub reply_to: Option<Party>,
    pub subject: String,
    #[serde(rename = "htmlContent")]
    pub html_content: String,
}
