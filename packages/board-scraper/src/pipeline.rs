//! The run-once driver: walk, filter, diff, persist, notify.

use anyhow::{Context, Result};
use mailer::MailerClient;
use tracing::info;

use crate::filter::{filter_matches, MatchCriteria};
use crate::notify;
use crate::seen::{diff_new, SeenStore};
use crate::surface::GridSurface;
use crate::types::PostingKey;
use crate::walker::{walk, WalkConfig, WalkState};

/// Counts from one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineReport {
    pub scraped: usize,
    pub matched: usize,
    pub new: usize,
    pub notified: usize,
}

/// One full scrape → filter → dedup → notify cycle.
///
/// New keys are persisted before delivery is attempted, so a delivery
/// failure leaves keys marked seen without their digest having gone out.
pub async fn run(
    surface: &dyn GridSurface,
    criteria: &MatchCriteria,
    seen: &mut dyn SeenStore,
    mailer: Option<&MailerClient>,
    walk_config: &WalkConfig,
) -> Result<PipelineReport> {
    let mut state = WalkState::new();
    walk(surface, walk_config, &mut state)
        .await
        .context("grid walk failed")?;
    let records = state.into_records();
    info!(scraped = records.len(), "Walk complete");

    let matches = filter_matches(&records, criteria);
    let new_postings = diff_new(seen, &matches);
    info!(
        matched = matches.len(),
        new = new_postings.len(),
        "Filtered and deduplicated"
    );

    let new_keys: Vec<PostingKey> = new_postings.iter().map(|r| r.posting_key()).collect();
    seen.add(&new_keys)
        .await
        .context("failed to persist new posting keys")?;

    let notified = notify::notify(mailer, &new_postings).await?;

    Ok(PipelineReport {
        scraped: records.len(),
        matched: matches.len(),
        new: new_postings.len(),
        notified,
    })
}
