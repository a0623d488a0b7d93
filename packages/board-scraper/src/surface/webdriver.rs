//! Live grid surface driven over the WebDriver protocol.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;
use webdriver::{WebDriverClient, WebDriverError};

use super::GridSurface;
use crate::types::{columns, RowId};

const LEFT_ROW_SELECTOR: &str = "div.dataLeftPane div.dataRow";
const SCROLL_CONTAINER: &str = "div.antiscroll-inner";

/// Interval between readiness probes after a scroll.
const SETTLE_INTERVAL: Duration = Duration::from_millis(250);
/// Probe cap per scroll; past this the walker reads whatever is there.
const SETTLE_RETRIES: u32 = 12;
/// Interval between probes while waiting for an apply-link anchor.
const LINK_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct WebDriverSurface {
    driver: WebDriverClient,
}

impl WebDriverSurface {
    /// Open a browser session and navigate it to the hosted grid.
    pub async fn open(webdriver_url: &Url, grid_url: &Url) -> Result<Self> {
        let driver = WebDriverClient::new_session(webdriver_url.as_str())
            .await
            .context("Failed to create WebDriver session")?;
        driver
            .goto(grid_url.as_str())
            .await
            .context("Failed to navigate to the grid")?;
        Ok(Self { driver })
    }

    /// Tear down the browser session.
    pub async fn close(self) -> Result<()> {
        self.driver
            .delete_session()
            .await
            .context("Failed to close WebDriver session")?;
        Ok(())
    }

    fn cell_selector(pane: &str, row: &RowId, column: u32) -> String {
        format!(
            "div.{}Pane div.dataRow[data-rowid=\"{}\"] div[data-columnindex=\"{}\"]",
            pane, row.0, column
        )
    }

    async fn cell_text(&self, selector: &str) -> Result<Option<String>> {
        match self.driver.find_element(selector).await {
            Ok(element) => {
                let text = self.driver.element_text(&element).await?;
                Ok(Some(text))
            }
            Err(WebDriverError::NoSuchElement(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Poll until at least one right-pane cell of `column` is mounted, up
    /// to the retry cap. Gives up quietly; a cell that never mounts reads
    /// as absent downstream.
    async fn wait_for_column(&self, column: u32) -> Result<()> {
        let selector = format!(
            "div.dataRightPane div.dataRow div[data-columnindex=\"{}\"]",
            column
        );
        for _ in 0..SETTLE_RETRIES {
            if !self.driver.find_elements(&selector).await?.is_empty() {
                return Ok(());
            }
            tokio::time::sleep(SETTLE_INTERVAL).await;
        }
        warn!(column, "Column group never became readable after scroll");
        Ok(())
    }
}

#[async_trait]
impl GridSurface for WebDriverSurface {
    async fn wait_for_rows(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if !self.driver.find_elements(LEFT_ROW_SELECTOR).await?.is_empty() {
                debug!("Initial rows mounted");
                return Ok(());
            }
            if Instant::now() >= deadline {
                bail!("no rows mounted within {:?}", timeout);
            }
            tokio::time::sleep(SETTLE_INTERVAL).await;
        }
    }

    async fn visible_row_ids(&self) -> Result<Vec<RowId>> {
        let rows = self.driver.find_elements(LEFT_ROW_SELECTOR).await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(id) = self.driver.element_attribute(row, "data-rowid").await? {
                ids.push(RowId(id));
            }
        }
        Ok(ids)
    }

    async fn read_left_cell(&self, row: &RowId, column: u32) -> Result<Option<String>> {
        self.cell_text(&Self::cell_selector("dataLeft", row, column))
            .await
    }

    async fn read_cell(&self, row: &RowId, column: u32) -> Result<Option<String>> {
        self.cell_text(&Self::cell_selector("dataRight", row, column))
            .await
    }

    async fn read_link(
        &self,
        row: &RowId,
        column: u32,
        timeout: Duration,
    ) -> Result<Option<String>> {
        let selector = format!("{} a", Self::cell_selector("dataRight", row, column));
        let deadline = Instant::now() + timeout;
        loop {
            match self.driver.find_element(&selector).await {
                Ok(anchor) => {
                    return Ok(self.driver.element_attribute(&anchor, "href").await?);
                }
                Err(WebDriverError::NoSuchElement(_)) => {
                    if Instant::now() >= deadline {
                        return Ok(None);
                    }
                    tokio::time::sleep(LINK_POLL_INTERVAL).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn scroll_to_left_edge(&self) -> Result<()> {
        let script = format!(
            "document.querySelector('{}').scrollLeft = 0;",
            SCROLL_CONTAINER
        );
        self.driver.execute(&script, vec![]).await?;
        self.wait_for_column(columns::POSTED_DATE).await
    }

    async fn scroll_to_right_edge(&self) -> Result<()> {
        let script = format!(
            "var node = document.querySelector('{}'); node.scrollLeft = node.scrollWidth;",
            SCROLL_CONTAINER
        );
        self.driver.execute(&script, vec![]).await?;
        self.wait_for_column(columns::SALARY).await
    }

    async fn scroll_down_one_viewport(&self) -> Result<()> {
        let before = self.visible_row_ids().await?;
        let script = format!(
            "var node = document.querySelector('{}'); node.scrollTop += node.clientHeight;",
            SCROLL_CONTAINER
        );
        self.driver.execute(&script, vec![]).await?;

        // At the bottom of the table the row set never changes, so the
        // probe cap doubles as the settle delay of the final pass.
        for _ in 0..SETTLE_RETRIES {
            tokio::time::sleep(SETTLE_INTERVAL).await;
            if self.visible_row_ids().await? != before {
                break;
            }
        }
        Ok(())
    }
}
