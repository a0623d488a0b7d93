use serde::{Deserialize, Serialize};

/// One outbound email with an HTML body and a plain-text fallback.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}
