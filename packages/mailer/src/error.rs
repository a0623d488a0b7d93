use thiserror::Error;

pub type Result<T> = std::result::Result<T, MailerError>;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("HTTP request to mail API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API returned {status}: {message}")]
    Api { status: u16, message: String },
}
