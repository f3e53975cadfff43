//! Relay error types and response handling

use super::mailer::MailError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned by the contact endpoint. Provider detail stays in the log.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("All fields are required")]
    MissingFields,
    /// Body was not JSON or a field had the wrong type; carries the parser detail
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("Email service is not configured. Please contact the site administrator.")]
    NotConfigured,
    #[error("Failed to send email. Please try again.")]
    Provider(#[from] MailError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingFields | RelayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RelayError::NotConfigured | RelayError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            RelayError::MissingFields => tracing::warn!("Contact rejected: missing fields"),
            RelayError::InvalidBody(detail) => {
                tracing::warn!("Contact rejected: unreadable body - {}", detail)
            }
            RelayError::NotConfigured => {
                tracing::error!("Contact relay error: {} - RESEND_API_KEY is not set", status)
            }
            RelayError::Provider(e) => tracing::error!("Contact relay error: {} - {}", status, e),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
