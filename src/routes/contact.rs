//! src/routes/contact.rs
use crate::dispatch::{handle_submission, DispatchError, DispatchSettings};
use crate::domain::SubmissionInput;
use crate::email::EmailClient;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Email sent successfully!";

#[derive(Serialize)]
struct Sent {
    success: bool,
    message: &'static str,
}

#[derive(Serialize)]
pub struct Failed {
    success: bool,
    error: String,
}

impl Failed {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl ResponseError for DispatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::Validation(_) => StatusCode::BAD_REQUEST,
            DispatchError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Failed::new(self.to_string()))
    }
}

#[tracing::instrument(
    name = "Receiving a contact form submission",
    skip(payload, email_client, settings),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn contact(
    payload: web::Json<SubmissionInput>,
    email_client: web::Data<EmailClient>,
    settings: web::Data<DispatchSettings>,
) -> Result<HttpResponse, DispatchError> {
    handle_submission(payload.into_inner(), email_client.get_ref(), &settings).await?;

    Ok(HttpResponse::Ok().json(Sent {
        success: true,
        message: SUCCESS_MESSAGE,
    }))
}

/// Bodies that are not a JSON object get the same JSON error shape as
/// every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error.message = %err, "Rejected an unreadable request body");
    let response = HttpResponse::BadRequest().json(Failed::new("Invalid request body"));
    InternalError::from_response(err, response).into()
}
