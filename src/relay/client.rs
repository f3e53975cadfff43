//! Client for the contact endpoint, used by the TUI contact form

use super::handlers::MessageResponse;
use super::ContactSubmission;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach the contact relay: {0}")]
    Transport(#[from] reqwest::Error),
    /// The relay answered with an error message meant for the user
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    /// Submit the form. Ok carries the relay's confirmation text.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<String, ClientError> {
        let response = self.client.post(&self.endpoint).json(submission).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: MessageResponse = response.json().await?;
            return Ok(body.message);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Unexpected response ({})", status));
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailConfig;
    use crate::content::Portfolio;
    use crate::relay::{serve, EmailMessage, MailError, Mailer, RelayState};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    struct AcceptAll;

    #[async_trait]
    impl Mailer for AcceptAll {
        async fn send(&self, _message: EmailMessage) -> Result<(), MailError> {
            Ok(())
        }
    }

    async fn spawn_relay(mailer: Option<Arc<dyn Mailer>>) -> (String, tokio::sync::oneshot::Sender<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = RelayState {
            mailer,
            mail: Arc::new(MailConfig::default()),
            content: Arc::new(Portfolio::bundled().unwrap()),
        };
        let (tx, rx) = tokio::sync::oneshot::channel();
        tokio::spawn(serve(listener, state, rx));
        (format!("http://{}", addr), tx)
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    #[tokio::test]
    async fn submit_round_trips_through_the_relay() {
        let (url, shutdown) = spawn_relay(Some(Arc::new(AcceptAll))).await;
        let client = ContactClient::new(&url).unwrap();
        let message = client.submit(&submission()).await.unwrap();
        assert_eq!(message, "Email sent successfully");
        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn relay_error_message_is_surfaced() {
        let (url, shutdown) = spawn_relay(None).await;
        let client = ContactClient::new(&url).unwrap();
        match client.submit(&submission()).await {
            Err(ClientError::Rejected { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.starts_with("Email service is not configured"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        let _ = shutdown.send(());
    }

    async fn post_raw(url: &str, body: &str) -> (u16, serde_json::Value) {
        let response = reqwest::Client::new()
            .post(format!("{}/api/contact", url))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    #[tokio::test]
    async fn unparseable_body_gets_json_error() {
        let (url, shutdown) = spawn_relay(Some(Arc::new(AcceptAll))).await;
        let (status, body) = post_raw(&url, "not json").await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Invalid request body");
        let _ = shutdown.send(());
    }

    #[tokio::test]
    async fn wrongly_typed_field_gets_json_error() {
        let (url, shutdown) = spawn_relay(Some(Arc::new(AcceptAll))).await;
        let (status, body) = post_raw(
            &url,
            r#"{"name":42,"email":"sam@example.com","subject":"Hi","message":"Hello"}"#,
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Invalid request body");
        assert!(!body.to_string().contains("invalid type"));
        let _ = shutdown.send(());
    }
}
