//! Deterministic in-memory grid surface and seen store for tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use board_scraper::seen::SeenStore;
use board_scraper::surface::GridSurface;
use board_scraper::types::{columns, PostingKey, RowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HorizontalPosition {
    LeftEdge,
    RightEdge,
}

/// One logical row of the fake grid.
#[derive(Debug, Clone)]
pub struct FakeRow {
    pub id: String,
    pub cells: HashMap<u32, String>,
    pub link: Option<String>,
}

impl FakeRow {
    pub fn new(id: &str, title: &str) -> Self {
        let mut cells = HashMap::new();
        cells.insert(columns::TITLE, title.to_string());
        Self {
            id: id.to_string(),
            cells,
            link: None,
        }
    }

    pub fn posted_date(self, value: &str) -> Self {
        self.cell(columns::POSTED_DATE, value)
    }

    pub fn location(self, value: &str) -> Self {
        self.cell(columns::LOCATION, value)
    }

    pub fn company(self, value: &str) -> Self {
        self.cell(columns::COMPANY, value)
    }

    pub fn hire_time(self, value: &str) -> Self {
        self.cell(columns::HIRE_TIME, value)
    }

    pub fn grad_time(self, value: &str) -> Self {
        self.cell(columns::GRAD_TIME, value)
    }

    pub fn salary(self, value: &str) -> Self {
        self.cell(columns::SALARY, value)
    }

    pub fn qualifications(self, value: &str) -> Self {
        self.cell(columns::QUALIFICATIONS, value)
    }

    pub fn apply_link(mut self, href: &str) -> Self {
        self.link = Some(href.to_string());
        self
    }

    fn cell(mut self, column: u32, value: &str) -> Self {
        self.cells.insert(column, value.to_string());
        self
    }
}

/// Virtualized two-pane grid over a fixed list of logical rows. Only a
/// viewport-sized window of rows is ever "mounted"; right-pane cells are
/// readable only when the horizontal position matches their column group.
pub struct FakeGrid {
    rows: Vec<FakeRow>,
    viewport: usize,
    top: Mutex<usize>,
    hpos: Mutex<HorizontalPosition>,
    recycle_ids: bool,
}

impl FakeGrid {
    pub fn new(rows: Vec<FakeRow>, viewport: usize) -> Self {
        Self {
            rows,
            viewport,
            top: Mutex::new(0),
            hpos: Mutex::new(HorizontalPosition::LeftEdge),
            recycle_ids: false,
        }
    }

    /// Reuse the same identity for whichever logical row currently
    /// occupies a mounted slot, the way an aggressive virtualizer does.
    pub fn with_recycled_ids(mut self) -> Self {
        self.recycle_ids = true;
        self
    }

    fn mounted(&self) -> Vec<(RowId, FakeRow)> {
        let top = *self.top.lock().unwrap();
        let end = (top + self.viewport).min(self.rows.len());
        self.rows[top..end]
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                let id = if self.recycle_ids {
                    // DOM nodes are reused cyclically, so the identity a
                    // logical row gets depends on its index, not the row.
                    format!("slot-{}", (top + offset) % self.viewport)
                } else {
                    row.id.clone()
                };
                (RowId(id), row.clone())
            })
            .collect()
    }

    fn find_mounted(&self, row: &RowId) -> Option<FakeRow> {
        self.mounted()
            .into_iter()
            .find(|(id, _)| id == row)
            .map(|(_, r)| r)
    }

    fn column_in_view(&self, column: u32) -> bool {
        let hpos = *self.hpos.lock().unwrap();
        match column {
            columns::SALARY | columns::QUALIFICATIONS => hpos == HorizontalPosition::RightEdge,
            _ => hpos == HorizontalPosition::LeftEdge,
        }
    }
}

#[async_trait]
impl GridSurface for FakeGrid {
    async fn wait_for_rows(&self, timeout: Duration) -> Result<()> {
        if self.rows.is_empty() {
            bail!("no rows mounted within {:?}", timeout);
        }
        Ok(())
    }

    async fn visible_row_ids(&self) -> Result<Vec<RowId>> {
        Ok(self.mounted().into_iter().map(|(id, _)| id).collect())
    }

    async fn read_left_cell(&self, row: &RowId, column: u32) -> Result<Option<String>> {
        Ok(self
            .find_mounted(row)
            .and_then(|r| r.cells.get(&column).cloned()))
    }

    async fn read_cell(&self, row: &RowId, column: u32) -> Result<Option<String>> {
        if !self.column_in_view(column) {
            return Ok(None);
        }
        Ok(self
            .find_mounted(row)
            .and_then(|r| r.cells.get(&column).cloned()))
    }

    async fn read_link(
        &self,
        row: &RowId,
        _column: u32,
        _timeout: Duration,
    ) -> Result<Option<String>> {
        Ok(self.find_mounted(row).and_then(|r| r.link))
    }

    async fn scroll_to_left_edge(&self) -> Result<()> {
        *self.hpos.lock().unwrap() = HorizontalPosition::LeftEdge;
        Ok(())
    }

    async fn scroll_to_right_edge(&self) -> Result<()> {
        *self.hpos.lock().unwrap() = HorizontalPosition::RightEdge;
        Ok(())
    }

    async fn scroll_down_one_viewport(&self) -> Result<()> {
        let mut top = self.top.lock().unwrap();
        let max_top = self.rows.len().saturating_sub(self.viewport);
        *top = (*top + self.viewport).min(max_top);
        Ok(())
    }
}

/// Seen store with no persistence, for pipeline tests.
#[derive(Debug, Default)]
pub struct MemorySeenStore {
    keys: HashSet<String>,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeenStore for MemorySeenStore {
    fn contains(&self, key: &PostingKey) -> bool {
        self.keys.contains(&key.0)
    }

    async fn add(&mut self, keys: &[PostingKey]) -> Result<()> {
        for key in keys {
            self.keys.insert(key.0.clone());
        }
        Ok(())
    }
}
