// Entry point: one scrape-filter-notify cycle, no flags.

use anyhow::{Context, Result};
use board_scraper::config::Config;
use board_scraper::pipeline;
use board_scraper::seen::FileSeenStore;
use board_scraper::surface::WebDriverSurface;
use board_scraper::walker::WalkConfig;
use mailer::MailerClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,board_scraper=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let mut seen = FileSeenStore::open(&config.seen_file)
        .await
        .context("Failed to open seen-postings file")?;
    let mailer = config.mailer.clone().map(MailerClient::new);

    let surface = WebDriverSurface::open(&config.webdriver_url, &config.grid_url)
        .await
        .context("Failed to open a session against the grid")?;

    let outcome = pipeline::run(
        &surface,
        &config.criteria,
        &mut seen,
        mailer.as_ref(),
        &WalkConfig::default(),
    )
    .await;

    if let Err(e) = surface.close().await {
        tracing::warn!(error = %e, "Failed to close grid session");
    }

    let report = outcome?;
    tracing::info!(
        scraped = report.scraped,
        matched = report.matched,
        new = report.new,
        notified = report.notified,
        "Run complete"
    );
    Ok(())
}
