use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebDriverError>;

#[derive(Debug, Error)]
pub enum WebDriverError {
    #[error("HTTP request to WebDriver endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebDriver endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no such element: {0}")]
    NoSuchElement(String),
}
