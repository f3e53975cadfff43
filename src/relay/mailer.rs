//! Outbound mail: message composition and the provider client

use super::ContactSubmission;
use crate::config::MailConfig;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// One message as handed to the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail provider returned {status}: {body}")]
    Provider { status: u16, body: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError>;
}

/// Resend HTTP API (`POST {api_url}/emails`, bearer auth)
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(client: reqwest::Client, api_url: &str, api_key: String) -> Self {
        Self {
            client,
            endpoint: format!("{}/emails", api_url.trim_end_matches('/')),
            api_key,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(MailError::Provider {
            status: status.as_u16(),
            body,
        })
    }
}

/// Build the email for a validated submission
pub fn compose(config: &MailConfig, submission: &ContactSubmission) -> EmailMessage {
    let message = escape_html(&submission.message).replace('\n', "<br>");
    let html = format!(
        "<h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Subject:</strong> {subject}</p>\
         <p><strong>Message:</strong></p>\
         <p>{message}</p>",
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        subject = escape_html(&submission.subject),
        message = message,
    );

    EmailMessage {
        from: config.from.clone(),
        to: config.to.clone(),
        subject: format!("{}{}", config.subject_prefix, submission.subject),
        html,
        reply_to: submission.email.clone(),
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(message: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            subject: "Hello".into(),
            message: message.into(),
        }
    }

    #[test]
    fn compose_fills_envelope() {
        let config = MailConfig::default();
        let email = compose(&config, &submission("hi"));
        assert_eq!(email.from, config.from);
        assert_eq!(email.to, config.to);
        assert_eq!(email.subject, "Portfolio Contact: Hello");
        assert_eq!(email.reply_to, "sam@example.com");
    }

    #[test]
    fn newlines_become_line_breaks() {
        let email = compose(&MailConfig::default(), &submission("line one\nline two"));
        assert!(email.html.contains("line one<br>line two"));
    }

    #[test]
    fn submitted_markup_is_escaped() {
        let email = compose(&MailConfig::default(), &submission("<script>x</script> & co"));
        assert!(email.html.contains("&lt;script&gt;x&lt;/script&gt; &amp; co"));
        assert!(!email.html.contains("<script>"));
    }

    #[test]
    fn message_serializes_with_provider_field_names() {
        let email = compose(&MailConfig::default(), &submission("hi"));
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["reply_to"], "sam@example.com");
        assert!(json["to"].is_array());
    }
}
