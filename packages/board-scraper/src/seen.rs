//! Persisted set of posting keys that have already been notified.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::types::{PostingKey, Record};

/// Key store over posting identities. The file-backed implementation is
/// the default; the trait exists so a transactional or concurrency-safe
/// store can be swapped in without touching the pipeline.
#[async_trait]
pub trait SeenStore: Send + Sync {
    fn contains(&self, key: &PostingKey) -> bool;

    /// Record keys as seen, persisting them before returning.
    async fn add(&mut self, keys: &[PostingKey]) -> Result<()>;
}

/// Candidates whose key is not yet in the store, input order preserved.
pub fn diff_new(store: &dyn SeenStore, candidates: &[Record]) -> Vec<Record> {
    candidates
        .iter()
        .filter(|record| !store.contains(&record.posting_key()))
        .cloned()
        .collect()
}

/// Line-delimited key file, one PostingKey per line, append-only.
///
/// Not transactional: a crash between diffing and appending, or two
/// concurrent runs, can persist overlapping keys and double-notify.
pub struct FileSeenStore {
    path: PathBuf,
    keys: HashSet<String>,
}

impl FileSeenStore {
    /// Load the key file, creating it empty when missing. A missing file
    /// is never an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let keys = match fs::read_to_string(&path).await {
            Ok(contents) => contents
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                fs::write(&path, "")
                    .await
                    .with_context(|| format!("Failed to create seen file at {}", path.display()))?;
                HashSet::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read seen file at {}", path.display()))
            }
        };

        debug!(path = %path.display(), keys = keys.len(), "Loaded seen postings");
        Ok(Self { path, keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[async_trait]
impl SeenStore for FileSeenStore {
    fn contains(&self, key: &PostingKey) -> bool {
        self.keys.contains(&key.0)
    }

    async fn add(&mut self, keys: &[PostingKey]) -> Result<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open seen file at {}", self.path.display()))?;

        for key in keys {
            if self.keys.insert(key.0.clone()) {
                file.write_all(format!("{}\n", key.0).as_bytes())
                    .await
                    .context("Failed to append to seen file")?;
            }
        }
        file.flush().await.context("Failed to flush seen file")?;
        Ok(())
    }
}
