//! Internship board scraper.
//!
//! Walks a remote, virtualized, two-pane data grid, assembles one record
//! per logical row, filters the records against allow-lists on the
//! graduation and hiring windows, deduplicates them against a persisted
//! seen-set, and emails a digest of the new matches.

pub mod config;
pub mod filter;
pub mod notify;
pub mod pipeline;
pub mod seen;
pub mod surface;
pub mod types;
pub mod walker;

pub use config::Config;
pub use filter::MatchCriteria;
pub use pipeline::PipelineReport;
pub use types::{PostingKey, Record, RowId, NOT_AVAILABLE};
pub use walker::{WalkConfig, WalkState};
