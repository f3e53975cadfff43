//! Mail provider settings for the contact relay

use serde::Deserialize;

/// Mail provider configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    /// Provider base URL (Resend-compatible `POST {api_url}/emails`)
    pub api_url: String,
    /// Sender shown on relayed messages
    pub from: String,
    /// Fixed recipients of every contact message
    pub to: Vec<String>,
    /// Prepended to the submitted subject
    pub subject_prefix: String,
    /// Provider API key; from RESEND_API_KEY only
    pub api_key: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.resend.com".to_string(),
            from: "Portfolio Contact <noreply@example.com>".to_string(),
            to: vec!["hello@example.com".to_string()],
            subject_prefix: "Portfolio Contact: ".to_string(),
            api_key: None,
        }
    }
}

/// Mail settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileMail {
    pub api_url: Option<String>,
    pub from: Option<String>,
    pub to: Option<Vec<String>>,
    pub subject_prefix: Option<String>,
}

impl MailConfig {
    /// Create from file config; the key comes from the environment
    pub fn from_file(file: Option<FileMail>, api_key: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            from: file.from.unwrap_or(defaults.from),
            to: file.to.filter(|to| !to.is_empty()).unwrap_or(defaults.to),
            subject_prefix: file.subject_prefix.unwrap_or(defaults.subject_prefix),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
