//! HTTP handlers for the relay endpoints

use super::error::RelayError;
use super::mailer::compose;
use super::{ContactSubmission, RelayState};
use crate::config::VERSION;
use crate::content::Portfolio;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Request body for POST /api/contact. Fields are optional so that a missing
/// field gets the same 400 as an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    /// Whitespace-only counts as missing; accepted values are kept as sent.
    pub fn validate(self) -> Result<ContactSubmission, RelayError> {
        fn required(field: Option<String>) -> Result<String, RelayError> {
            field
                .filter(|v| !v.trim().is_empty())
                .ok_or(RelayError::MissingFields)
        }

        Ok(ContactSubmission {
            name: required(self.name)?,
            email: required(self.email)?,
            subject: required(self.subject)?,
            message: required(self.message)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub mail_configured: bool,
}

/// POST /api/contact
///
/// Body rejections are answered here rather than by axum so every failure
/// carries the `{"error": ...}` payload.
pub async fn submit_contact(
    State(state): State<RelayState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, RelayError> {
    let Some(mailer) = state.mailer.as_ref() else {
        return Err(RelayError::NotConfigured);
    };
    let Json(request) = payload.map_err(|e| RelayError::InvalidBody(e.body_text()))?;
    let submission = request.validate()?;

    let email = compose(&state.mail, &submission);
    mailer.send(email).await?;

    tracing::info!("Relayed contact message from {}", submission.email);
    Ok(Json(MessageResponse {
        message: "Email sent successfully".to_string(),
    }))
}

/// GET /api/content
pub async fn get_content(State(state): State<RelayState>) -> Json<Portfolio> {
    Json(state.content.as_ref().clone())
}

/// GET /api/health
pub async fn health(State(state): State<RelayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        mail_configured: state.mailer.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailConfig;
    use crate::relay::mailer::{EmailMessage, MailError, Mailer};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeMailer {
        sent: Mutex<Vec<EmailMessage>>,
        fail: bool,
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Provider {
                    status: 422,
                    body: "invalid from address".into(),
                });
            }
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    fn state(mailer: Option<Arc<FakeMailer>>) -> RelayState {
        RelayState {
            mailer: mailer.map(|m| m as Arc<dyn Mailer>),
            mail: Arc::new(MailConfig::default()),
            content: Arc::new(Portfolio::bundled().unwrap()),
        }
    }

    fn request(message: &str) -> ContactRequest {
        ContactRequest {
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            subject: Some("Project inquiry".into()),
            message: Some(message.into()),
        }
    }

    async fn error_body(err: RelayError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let mailer = Arc::new(FakeMailer::default());
        let mut req = request("hi");
        req.subject = None;

        let err = submit_contact(State(state(Some(mailer.clone()))), Ok(Json(req)))
            .await
            .unwrap_err();
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "All fields are required");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_field_is_bad_request() {
        let mailer = Arc::new(FakeMailer::default());
        let err = submit_contact(State(state(Some(mailer))), Ok(Json(request("   "))))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unconfigured_mailer_is_server_error() {
        let err = submit_contact(State(state(None)), Ok(Json(request("hi"))))
            .await
            .unwrap_err();
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Email service is not configured. Please contact the site administrator."
        );
    }

    #[tokio::test]
    async fn provider_failure_is_generic() {
        let mailer = Arc::new(FakeMailer {
            fail: true,
            ..Default::default()
        });
        let err = submit_contact(State(state(Some(mailer))), Ok(Json(request("hi"))))
            .await
            .unwrap_err();
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to send email. Please try again.");
        assert!(!body.to_string().contains("invalid from address"));
    }

    #[tokio::test]
    async fn success_sends_composed_email() {
        let mailer = Arc::new(FakeMailer::default());
        let Json(response) = submit_contact(
            State(state(Some(mailer.clone()))),
            Ok(Json(request("First line\nSecond line"))),
        )
        .await
        .unwrap();
        assert_eq!(response.message, "Email sent successfully");

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Portfolio Contact: Project inquiry");
        assert_eq!(sent[0].reply_to, "sam@example.com");
        assert!(sent[0].html.contains("First line<br>Second line"));
    }

    #[test]
    fn accepted_fields_keep_their_whitespace() {
        let submission = request("  indented\n\nsigned off\n").validate().unwrap();
        assert_eq!(submission.message, "  indented\n\nsigned off\n");
        assert_eq!(submission.name, "Sam");
    }

    #[tokio::test]
    async fn health_reports_mail_status() {
        let Json(health) = health(State(state(None))).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, VERSION);
        assert!(!health.mail_configured);
    }

    #[tokio::test]
    async fn content_endpoint_serves_portfolio() {
        let Json(content) = get_content(State(state(None))).await;
        assert_eq!(content, Portfolio::bundled().unwrap());
    }
}
