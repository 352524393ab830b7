//! File Store - Atomic JSON Quote Persistence
//!
//! Implements the `QuoteStore` port with two small JSON files under a
//! data directory: `quotes.json` (the collection, a pretty-printed
//! array) and `prefs.json` (the last selected category filter). Writes
//! go to a tmp file first and are renamed into place, so the files are
//! always either the old or the new version, never a partial write.
//!
//! The last-viewed index is the ephemeral tier: it lives in process
//! memory only and disappears when the session ends.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use crate::domain::quote::{Quote, seed_quotes};
use crate::ports::store::QuoteStore;

/// Durable per-user preferences.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Prefs {
    /// Last selected category filter.
    last_category_filter: Option<String>,
}

/// Atomic JSON file store for the quote collection.
pub struct FileStore {
    /// Path to quotes.json.
    quotes_path: PathBuf,
    /// Temporary path for atomic collection writes.
    quotes_tmp: PathBuf,
    /// Path to prefs.json.
    prefs_path: PathBuf,
    /// Temporary path for atomic prefs writes.
    prefs_tmp: PathBuf,
    /// Session-scoped last-viewed index.
    last_viewed: Mutex<Option<usize>>,
}

impl FileStore {
    /// Create a new store in the given data directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(data_dir: &str) -> Result<Self> {
        let dir = Path::new(data_dir);
        fs::create_dir_all(dir)
            .await
            .context("Failed to create data directory")?;

        Ok(Self {
            quotes_path: dir.join("quotes.json"),
            quotes_tmp: dir.join("quotes.json.tmp"),
            prefs_path: dir.join("prefs.json"),
            prefs_tmp: dir.join("prefs.json.tmp"),
            last_viewed: Mutex::new(None),
        })
    }

    async fn write_atomic(path: &Path, tmp: &Path, payload: &str) -> Result<()> {
        fs::write(tmp, payload)
            .await
            .context("Failed to write tmp file")?;
        fs::rename(tmp, path)
            .await
            .context("Failed to rename into place")?;
        Ok(())
    }

    async fn load_prefs(&self) -> Result<Prefs> {
        if !self.prefs_path.exists() {
            return Ok(Prefs::default());
        }
        let json = fs::read_to_string(&self.prefs_path)
            .await
            .context("Failed to read prefs file")?;
        serde_json::from_str(&json).context("Failed to parse prefs JSON")
    }

    async fn save_prefs(&self, prefs: &Prefs) -> Result<()> {
        let json = serde_json::to_string_pretty(prefs).context("Failed to serialize prefs")?;
        Self::write_atomic(&self.prefs_path, &self.prefs_tmp, &json).await
    }
}

#[async_trait]
impl QuoteStore for FileStore {
    /// Load the collection, seeding the defaults on first use.
    async fn load(&self) -> Result<Vec<Quote>> {
        if !self.quotes_path.exists() {
            let seed = seed_quotes();
            self.save(&seed).await?;
            info!(quotes = seed.len(), "No quotes file found, seeded defaults");
            return Ok(seed);
        }

        let json = fs::read_to_string(&self.quotes_path)
            .await
            .context("Failed to read quotes file")?;
        let quotes: Vec<Quote> =
            serde_json::from_str(&json).context("Failed to parse quotes JSON")?;

        info!(
            path = %self.quotes_path.display(),
            quotes = quotes.len(),
            "Quote collection loaded"
        );

        Ok(quotes)
    }

    /// Save the collection atomically (tmp then rename).
    async fn save(&self, quotes: &[Quote]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(quotes).context("Failed to serialize quotes")?;
        Self::write_atomic(&self.quotes_path, &self.quotes_tmp, &json).await?;
        debug!(count = quotes.len(), "Quote collection saved");
        Ok(())
    }

    async fn remember_filter(&self, category: &str) -> Result<()> {
        let mut prefs = self.load_prefs().await?;
        prefs.last_category_filter = Some(category.to_string());
        self.save_prefs(&prefs).await
    }

    async fn last_filter(&self) -> Result<Option<String>> {
        Ok(self.load_prefs().await?.last_category_filter)
    }

    fn remember_last_viewed(&self, index: usize) {
        if let Ok(mut guard) = self.last_viewed.lock() {
            *guard = Some(index);
        }
    }

    fn last_viewed(&self) -> Option<usize> {
        self.last_viewed.lock().ok().and_then(|guard| *guard)
    }

    async fn is_healthy(&self) -> bool {
        match self.quotes_path.parent() {
            Some(dir) => fs::metadata(dir).await.is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_last_viewed_is_session_scoped() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_str().unwrap()).await.unwrap();

        assert_eq!(store.last_viewed(), None);
        store.remember_last_viewed(2);
        assert_eq!(store.last_viewed(), Some(2));

        // A fresh store over the same directory starts a new session.
        let next = FileStore::new(dir.path().to_str().unwrap()).await.unwrap();
        assert_eq!(next.last_viewed(), None);
    }

    #[tokio::test]
    async fn test_filter_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_str().unwrap()).await.unwrap();

        store.remember_filter("Work").await.unwrap();

        let next = FileStore::new(dir.path().to_str().unwrap()).await.unwrap();
        assert_eq!(next.last_filter().await.unwrap(), Some("Work".to_string()));
    }
}
