pub mod configuration;
pub mod dispatch;
pub mod domain;
pub mod email;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
