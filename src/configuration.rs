//! src/configuration.rs
use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Browser origins allowed to call the API. Requests without an
    /// `Origin` header are always let through.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct EmailSettings {
    pub sender_email: String,
    pub recipient_email: String,
    pub notification_sender_name: String,
    pub confirmation_sender_name: String,
    pub timeout_milliseconds: u64,
    pub transport: TransportSettings,
}

impl EmailSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum TransportSettings {
    Smtp(SmtpSettings),
    Brevo(BrevoSettings),
}

#[derive(Deserialize, Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub tls: TlsPolicy,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

/// How the SMTP connection is secured.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsPolicy {
    /// Implicit TLS from the first byte, usually port 465.
    Wrapper,
    /// Plaintext upgraded with a mandatory STARTTLS, usually port 587.
    Starttls,
    /// No encryption at all. Only for local relays and test servers.
    None,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BrevoSettings {
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
}

/// Process environment variables that take precedence over the files.
#[derive(Deserialize, Debug, Default)]
struct EnvironmentOverrides {
    port: Option<u16>,
    email_user: Option<String>,
    email_pass: Option<Secret<String>>,
    recipient_email: Option<String>,
}

impl Settings {
    fn apply(&mut self, overrides: EnvironmentOverrides) {
        if let Some(port) = overrides.port {
            self.application.port = port;
        }

        if let Some(recipient_email) = overrides.recipient_email {
            self.email.recipient_email = recipient_email;
        }

        if let Some(user) = overrides.email_user {
            if let TransportSettings::Smtp(smtp) = &mut self.email.transport {
                smtp.username = Some(user.clone());
            }
            self.email.sender_email = user;
        }

        if let Some(pass) = overrides.email_pass {
            match &mut self.email.transport {
                TransportSettings::Smtp(smtp) => smtp.password = Some(pass),
                TransportSettings::Brevo(brevo) => brevo.api_key = Some(pass),
            }
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(ConfigError::Message(format!("Failed to read the .env file: {}", e)));
        }
    }

    let overrides = envy::from_env::<EnvironmentOverrides>()
        .map_err(|e| ConfigError::Message(format!("Failed to parse environment overrides: {}", e)))?;
    settings.apply(overrides);

    Ok(settings)
}
