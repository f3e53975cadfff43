//! Contact relay: a small HTTP service that forwards contact form
//! submissions to the mail provider and serves the portfolio content.
//!
//! Endpoints:
//! - `POST /api/contact`: relay a message
//! - `GET /api/content`: portfolio content as JSON
//! - `GET /api/health`: liveness and mail status

pub mod client;
pub mod error;
pub mod handlers;
pub mod mailer;

pub use client::{ClientError, ContactClient};
pub use mailer::{EmailMessage, MailError, Mailer, ResendMailer};

use crate::config::{Config, MailConfig};
use crate::content::Portfolio;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// A validated contact form submission (all fields trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Shared state for the relay server
#[derive(Clone)]
pub struct RelayState {
    /// `None` when no API key is configured
    pub mailer: Option<Arc<dyn Mailer>>,
    pub mail: Arc<MailConfig>,
    pub content: Arc<Portfolio>,
}

impl RelayState {
    /// Build state from config, creating the provider client when a key is set
    pub fn from_config(config: &Config, content: Arc<Portfolio>) -> Result<Self> {
        let mailer: Option<Arc<dyn Mailer>> = match &config.mail.api_key {
            Some(key) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(30))
                    .build()
                    .context("Failed to create HTTP client")?;
                Some(Arc::new(ResendMailer::new(
                    client,
                    &config.mail.api_url,
                    key.clone(),
                )))
            }
            None => {
                tracing::warn!("RESEND_API_KEY not set; contact form submissions will be rejected");
                None
            }
        };

        Ok(Self {
            mailer,
            mail: Arc::new(config.mail.clone()),
            content,
        })
    }
}

pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/content", get(handlers::get_content))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}

/// Start the relay server and run until `shutdown_rx` fires
pub async fn start_relay(
    config: Config,
    content: Arc<Portfolio>,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let state = RelayState::from_config(&config, content)?;
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    serve(listener, state, shutdown_rx).await
}

/// Serve on an already-bound listener
pub async fn serve(
    listener: TcpListener,
    state: RelayState,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no address")?;
    tracing::info!("Contact relay listening on {}", addr);

    // Stop accepting on shutdown; in-flight requests finish
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Contact relay shut down gracefully");
    Ok(())
}
