use contact_form::configuration::get_configuration;
use contact_form::startup::build;
use contact_form::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("contact_form".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration()?;
    let app = build(config)?;
    tracing::info!("Server running on port {}", app.port());
    app.run().await?;

    Ok(())
}
