//! src/startup.rs
use crate::configuration::Settings;
use crate::dispatch::DispatchSettings;
use crate::email::EmailClient;
use crate::routes::{contact, health_check, json_error_handler};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener = TcpListener::bind(address)?;
    let port = tcp_listener.local_addr()?.port();

    let email_client = EmailClient::from_settings(&config.email)?;
    let dispatch_settings = DispatchSettings::from(&config.email);

    let server = run(
        tcp_listener,
        email_client,
        dispatch_settings,
        config.application.allowed_origins,
    )?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    dispatch_settings: DispatchSettings,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    let email_client = web::Data::new(email_client);
    let dispatch_settings = web::Data::new(dispatch_settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/api/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(contact))
            .app_data(email_client.clone())
            .app_data(dispatch_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .block_on_origin_mismatch(true)
}
