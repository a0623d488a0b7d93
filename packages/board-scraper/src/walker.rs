//! The grid-walking state machine.
//!
//! Discovers every logical row of a virtualized table whose DOM only ever
//! holds a window of mounted rows. Each pass enumerates the rows the left
//! pane currently shows, extracts the ones not yet processed (scrolling
//! the shared horizontal container to reach each column group), and then
//! scrolls down one viewport. A pass that discovers no new row identity
//! means the bottom of the logical table has been reached.
//!
//! Known limitation: when the surface recycles a row identity for a
//! different logical row faster than the walk advances, that row is
//! silently skipped. `WalkConfig::key_rows_by_title` widens the processed
//! key to mitigate this; see the config docs.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::surface::GridSurface;
use crate::types::{columns, normalize_cell, Record, RowId, NOT_AVAILABLE};

/// Tuning knobs for one walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// How long to wait for the first row to mount before giving up.
    pub row_wait_timeout: Duration,
    /// How long to wait for an apply-link anchor before defaulting it.
    pub link_timeout: Duration,
    /// Hard cap on passes, guarding against a surface that keeps
    /// presenting fresh identities forever.
    pub max_passes: usize,
    /// Key the processed set by row identity plus title instead of the
    /// identity alone. Whether the surface reuses an identity for a
    /// different logical row within one walk is unresolved; this makes
    /// the skip behavior testable either way.
    pub key_rows_by_title: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            row_wait_timeout: Duration::from_secs(60),
            link_timeout: Duration::from_secs(1),
            max_passes: 500,
            key_rows_by_title: false,
        }
    }
}

/// Mutable walk state, owned by the caller so a walk can be inspected,
/// paused, or resumed.
#[derive(Debug, Default)]
pub struct WalkState {
    processed: HashSet<String>,
    records: Vec<Record>,
    passes: usize,
}

impl WalkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records accumulated so far, in first-seen order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }
}

/// Walk the grid until a full pass discovers no new rows.
///
/// Resumable: calling again with the same state continues where the
/// previous walk stopped instead of re-extracting processed rows.
pub async fn walk<S>(surface: &S, config: &WalkConfig, state: &mut WalkState) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    surface
        .wait_for_rows(config.row_wait_timeout)
        .await
        .context("grid never mounted any rows")?;

    loop {
        if state.passes >= config.max_passes {
            warn!(
                passes = state.passes,
                "Pass cap reached before the grid stopped yielding new rows"
            );
            break;
        }
        state.passes += 1;

        let row_ids = surface.visible_row_ids().await?;
        let mut new_rows = 0usize;

        for row_id in row_ids {
            if !config.key_rows_by_title && state.processed.contains(&row_id.0) {
                continue;
            }

            let title = normalize_cell(surface.read_left_cell(&row_id, columns::TITLE).await?);
            let key = if config.key_rows_by_title {
                format!("{}:{}", row_id.0, title)
            } else {
                row_id.0.clone()
            };
            if !state.processed.insert(key) {
                continue;
            }
            new_rows += 1;

            let record = extract_record(surface, config, &row_id, title).await?;
            debug!(title = %record.title, company = %record.company, "Scraped row");
            state.records.push(record);
        }

        if new_rows == 0 {
            info!(
                records = state.records.len(),
                passes = state.passes,
                "Reached the end of the grid"
            );
            break;
        }

        surface.scroll_down_one_viewport().await?;
    }

    Ok(())
}

/// Read every field of one row, scrolling the horizontal container so each
/// column group is in view when read.
async fn extract_record<S>(
    surface: &S,
    config: &WalkConfig,
    row: &RowId,
    title: String,
) -> Result<Record>
where
    S: GridSurface + ?Sized,
{
    surface.scroll_to_left_edge().await?;

    let apply_link = match surface
        .read_link(row, columns::APPLY_LINK, config.link_timeout)
        .await?
    {
        Some(href) => normalize_cell(Some(href)),
        None => {
            debug!(title = %title, "No apply link found for row");
            NOT_AVAILABLE.to_string()
        }
    };

    let posted_date = normalize_cell(surface.read_cell(row, columns::POSTED_DATE).await?);
    let location = normalize_cell(surface.read_cell(row, columns::LOCATION).await?);
    let company = normalize_cell(surface.read_cell(row, columns::COMPANY).await?);
    let hire_time = normalize_cell(surface.read_cell(row, columns::HIRE_TIME).await?);
    let grad_time = normalize_cell(surface.read_cell(row, columns::GRAD_TIME).await?);

    surface.scroll_to_right_edge().await?;

    let salary = normalize_cell(surface.read_cell(row, columns::SALARY).await?);
    let qualifications = normalize_cell(surface.read_cell(row, columns::QUALIFICATIONS).await?);

    Ok(Record {
        title,
        apply_link,
        posted_date,
        location,
        company,
        hire_time,
        grad_time,
        salary,
        qualifications,
    })
}
