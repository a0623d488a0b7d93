use anyhow::{Context, Result};
use dotenvy::dotenv;
use mailer::MailerOptions;
use std::env;
use std::path::PathBuf;
use url::Url;

use crate::filter::MatchCriteria;

/// Fixed location of the hosted board grid.
const DEFAULT_GRID_URL: &str =
    "https://airtable.com/app17F0kkWQZhC6HB/shrOTtndhc6HSgnYb/tblp8wxvfYam5sD04?";
const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
const DEFAULT_SEEN_FILE: &str = "seen_jobs.txt";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub grid_url: Url,
    pub webdriver_url: Url,
    pub seen_file: PathBuf,
    /// Absent when delivery credentials are not configured; the pipeline
    /// then skips notification instead of failing.
    pub mailer: Option<MailerOptions>,
    pub criteria: MatchCriteria,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let grid_url = env::var("GRID_URL").unwrap_or_else(|_| DEFAULT_GRID_URL.to_string());
        let webdriver_url =
            env::var("WEBDRIVER_URL").unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string());
        let seen_file = env::var("SEEN_JOBS_FILE").unwrap_or_else(|_| DEFAULT_SEEN_FILE.to_string());

        let mailer = match (env::var("MAILER_SENDER").ok(), env::var("MAILER_API_KEY").ok()) {
            (Some(sender), Some(api_key)) => Some(MailerOptions {
                sender,
                api_key,
                api_url: env::var("MAILER_API_URL").ok(),
            }),
            _ => None,
        };

        Ok(Self {
            grid_url: grid_url.parse().context("GRID_URL must be a valid URL")?,
            webdriver_url: webdriver_url
                .parse()
                .context("WEBDRIVER_URL must be a valid URL")?,
            seen_file: PathBuf::from(seen_file),
            mailer,
            criteria: MatchCriteria::default(),
        })
    }
}
