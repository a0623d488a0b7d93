//! Capability interface over the rendering surface.
//!
//! The grid is a virtualized two-pane table: a left pane holding the
//! leading column and a right pane holding the rest, vertically
//! synchronized but horizontally scrolled through one shared container.
//! The walker only ever talks to this trait, so it can run against a
//! deterministic fake in tests.

pub mod webdriver;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::RowId;

pub use self::webdriver::WebDriverSurface;

#[async_trait]
pub trait GridSurface: Send + Sync {
    /// Block until at least one row is mounted. Timing out is fatal to
    /// the whole walk.
    async fn wait_for_rows(&self, timeout: Duration) -> Result<()>;

    /// Identities of the rows currently mounted in the left pane, top to
    /// bottom.
    async fn visible_row_ids(&self) -> Result<Vec<RowId>>;

    /// Text of a left-pane cell. `None` when the cell is not present.
    async fn read_left_cell(&self, row: &RowId, column: u32) -> Result<Option<String>>;

    /// Text of a right-pane cell. The column must have been scrolled into
    /// view; reading an out-of-view column yields `None`.
    async fn read_cell(&self, row: &RowId, column: u32) -> Result<Option<String>>;

    /// Href of the anchor inside a right-pane cell. `None` when the anchor
    /// is absent or does not appear within the timeout; never an error.
    async fn read_link(&self, row: &RowId, column: u32, timeout: Duration)
        -> Result<Option<String>>;

    /// Scroll the shared horizontal container to its leftmost offset and
    /// wait (bounded) until the leading right-pane columns are readable.
    async fn scroll_to_left_edge(&self) -> Result<()>;

    /// Scroll the shared horizontal container to its rightmost offset and
    /// wait (bounded) until the trailing columns are readable.
    async fn scroll_to_right_edge(&self) -> Result<()>;

    /// Scroll the vertical container down by one viewport height and wait
    /// (bounded) for newly mounted rows to settle.
    async fn scroll_down_one_viewport(&self) -> Result<()>;
}
