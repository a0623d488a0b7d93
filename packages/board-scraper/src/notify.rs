//! Digest composition and delivery.

use std::fmt::Write;

use anyhow::{Context, Result};
use mailer::{MailerClient, OutboundMessage};
use tracing::{info, warn};

use crate::types::Record;

/// A composed digest ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Compose one digest summarizing every new posting. The apply link is
/// rendered as-is, sentinel included.
pub fn compose_digest(records: &[Record]) -> Digest {
    let subject = format!(
        "Found {} new internships that match your description!",
        records.len()
    );

    let mut html = String::from("<html><body>");
    html.push_str("<h2>Here are the new internships that match your criteria:</h2>");
    for record in records {
        let _ = write!(
            html,
            "<p><b>Title:</b> {}<br><b>Company:</b> {}<br><b>Location:</b> {}<br><b>Salary:</b> {}<br><a href=\"{}\"><b>Apply Here</b></a></p><hr>",
            record.title, record.company, record.location, record.salary, record.apply_link
        );
    }
    html.push_str("</body></html>");

    Digest {
        subject,
        html,
        text: "Please enable HTML to view this email.".to_string(),
    }
}

/// Dispatch the digest for a batch of new postings. Returns how many
/// postings were notified about.
///
/// Empty batch: nothing sent. No mailer configured: skipped with a
/// warning, the run still succeeds. A delivery failure propagates.
pub async fn notify(mailer: Option<&MailerClient>, new_records: &[Record]) -> Result<usize> {
    if new_records.is_empty() {
        info!("No new postings to notify about");
        return Ok(0);
    }

    let Some(mailer) = mailer else {
        warn!(
            count = new_records.len(),
            "Mail credentials not set, skipping digest"
        );
        return Ok(0);
    };

    let digest = compose_digest(new_records);
    let message = OutboundMessage {
        from: mailer.sender().to_string(),
        to: vec![mailer.sender().to_string()],
        subject: digest.subject,
        html: digest.html,
        text: digest.text,
    };

    let receipt = mailer
        .send(&message)
        .await
        .context("Failed to send digest email")?;
    info!(
        count = new_records.len(),
        message_id = %receipt.id,
        "Digest sent"
    );
    Ok(new_records.len())
}
