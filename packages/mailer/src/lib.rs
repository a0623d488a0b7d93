//! Transactional mail API client.
//!
//! A minimal client for a Resend-style transactional mail endpoint: one
//! authenticated POST per message, JSON in, JSON receipt out. Used to
//! deliver the new-postings digest.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailer::{MailerClient, MailerOptions, OutboundMessage};
//!
//! let client = MailerClient::new(MailerOptions {
//!     sender: "me@example.com".into(),
//!     api_key: "re_...".into(),
//!     api_url: None,
//! });
//! let receipt = client.send(&message).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{MailerError, Result};
pub use types::{OutboundMessage, SendReceipt};

const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct MailerOptions {
    /// Address the digest is sent from (and, here, to).
    pub sender: String,
    pub api_key: String,
    /// Override of the provider endpoint, mainly for tests.
    pub api_url: Option<String>,
}

pub struct MailerClient {
    client: reqwest::Client,
    options: MailerOptions,
}

impl MailerClient {
    pub fn new(options: MailerOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    pub fn sender(&self) -> &str {
        &self.options.sender
    }

    /// Send one message synchronously. Any non-2xx response is an error.
    pub async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt> {
        let url = self
            .options
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_API_URL);

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.options.api_key)
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MailerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let receipt: SendReceipt = resp.json().await?;
        tracing::debug!(message_id = %receipt.id, "Mail accepted by provider");
        Ok(receipt)
    }
}
