//! Quote Book - Owned Application State
//!
//! The single owner of the in-memory quote collection. Constructed at
//! startup from `QuoteStore::load`, mutated only through the methods
//! here, and durably persisted after every mutation. The wiring layer
//! performs one final `save` at shutdown.
//!
//! Every user-facing operation of the app lives here: add, import,
//! export, random display, category filtering, and the wholesale
//! replacement the sync engine applies after a merge.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::catalog::{self, CategoryFilter};
use crate::domain::quote::Quote;
use crate::ports::remote::RemoteSource;
use crate::ports::store::QuoteStore;
use crate::ports::view::{Notice, View};

/// Import failures. The collection is never partially mutated: parsing
/// happens fully before the first element is appended.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Payload was not valid JSON, or elements had the wrong shape.
    #[error("error importing quotes: {0}")]
    Parse(#[from] serde_json::Error),
    /// Payload was valid JSON but not an array.
    #[error("invalid JSON structure: expected an array of quotes")]
    NotAnArray,
    /// Import file could not be read, or the merged state not saved.
    #[error(transparent)]
    Io(#[from] anyhow::Error),
}

/// Owned application state over the store, remote, and view ports.
pub struct QuoteBook<S: QuoteStore, R: RemoteSource, V: View> {
    /// Durable + ephemeral persistence.
    store: Arc<S>,
    /// Simulated server, receives locally added quotes.
    remote: Arc<R>,
    /// Injected rendering capability.
    view: Arc<V>,
    /// The collection. Insertion order preserved.
    quotes: Vec<Quote>,
    /// Current category selection.
    filter: CategoryFilter,
    /// Destination for JSON exports.
    export_path: PathBuf,
}

impl<S: QuoteStore, R: RemoteSource, V: View> QuoteBook<S, R, V> {
    /// Load persisted state and restore the last category selection.
    pub async fn open(
        store: Arc<S>,
        remote: Arc<R>,
        view: Arc<V>,
        export_path: PathBuf,
    ) -> Result<Self> {
        let quotes = store.load().await.context("Failed to load quote collection")?;
        let filter = match store.last_filter().await? {
            Some(raw) => CategoryFilter::parse(&raw),
            None => CategoryFilter::All,
        };

        info!(
            quotes = quotes.len(),
            filter = %filter,
            "Quote book opened"
        );

        Ok(Self {
            store,
            remote,
            view,
            quotes,
            filter,
            export_path,
        })
    }

    /// The current collection.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// The current category selection.
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.quotes)
    }

    /// Push the current category list to the view.
    pub fn refresh_category_options(&self) {
        self.view.populate_category_options(&self.categories());
    }

    /// Persist the current collection. Idempotent.
    pub async fn save(&self) -> Result<()> {
        self.store.save(&self.quotes).await
    }

    /// Add a user-entered quote.
    ///
    /// Empty text or category is rejected with a validation notice and
    /// no mutation. On success the quote is appended, saved, posted to
    /// the remote (a post failure is logged, never fatal), and rendered.
    pub async fn add_quote(&mut self, text: &str, category: &str) -> Result<()> {
        let quote = match Quote::new(text, category) {
            Ok(quote) => quote,
            Err(reason) => {
                self.view.notify(&Notice::Invalid(reason.to_string()));
                return Ok(());
            }
        };

        self.quotes.push(quote.clone());
        self.save().await.context("Failed to save after add")?;

        match self.remote.post_quote(&quote).await {
            Ok(ack) if ack.accepted => {
                info!(quote = %quote, "Quote posted to server");
            }
            Ok(_) => warn!(quote = %quote, "Server did not accept quote"),
            Err(error) => {
                // The local add already succeeded; the next sync will
                // surface the quote as a local addition.
                warn!(error = %error, "Failed to post quote to server");
            }
        }

        self.refresh_category_options();
        self.view.notify(&Notice::QuoteAdded(quote.clone()));
        self.view.render(&quote);

        Ok(())
    }

    /// Append quotes from a JSON array payload.
    ///
    /// Non-array input and malformed JSON are rejected without touching
    /// the collection. Field emptiness is not validated on import.
    pub async fn import_json(&mut self, payload: &str) -> Result<usize, ImportError> {
        let parsed: serde_json::Value = serde_json::from_str(payload)?;
        if !parsed.is_array() {
            return Err(ImportError::NotAnArray);
        }
        let imported: Vec<Quote> = serde_json::from_value(parsed)?;

        let count = imported.len();
        self.quotes.extend(imported);
        self.save()
            .await
            .context("Failed to save after import")?;

        self.refresh_category_options();
        self.view.notify(&Notice::Imported(count));

        Ok(count)
    }

    /// Read a JSON file and import its contents.
    pub async fn import_from_file(&mut self, path: &Path) -> Result<usize, ImportError> {
        let payload = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read import file: {}", path.display()))?;
        self.import_json(&payload).await
    }

    /// The collection as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.quotes).context("Failed to serialize quotes")
    }

    /// Write the collection to the configured export file.
    pub async fn export_to_file(&self) -> Result<PathBuf> {
        let json = self.export_json()?;
        fs::write(&self.export_path, json)
            .await
            .with_context(|| {
                format!("Failed to write export file: {}", self.export_path.display())
            })?;

        self.view.notify(&Notice::Exported {
            count: self.quotes.len(),
            path: self.export_path.display().to_string(),
        });

        Ok(self.export_path.clone())
    }

    /// Show a uniformly random quote matching the current selection.
    ///
    /// Remembers the chosen index for this session so a restart of the
    /// display can re-show it.
    pub fn show_random(&self) {
        match catalog::pick_random(&self.quotes, &self.filter) {
            Some(index) => {
                self.store.remember_last_viewed(index);
                self.view.render(&self.quotes[index]);
            }
            None => self.view.render_empty(&self.filter.to_string()),
        }
    }

    /// Re-render the quote last shown this session, if still valid.
    ///
    /// Returns false when nothing was shown yet or the index no longer
    /// points into the collection.
    pub fn show_last_viewed(&self) -> bool {
        match self.store.last_viewed() {
            Some(index) if index < self.quotes.len() => {
                self.view.render(&self.quotes[index]);
                true
            }
            _ => false,
        }
    }

    /// Change the category selection, persist it, and re-render.
    pub async fn set_filter(&mut self, raw: &str) -> Result<()> {
        self.filter = CategoryFilter::parse(raw);
        self.store
            .remember_filter(&self.filter.to_string())
            .await
            .context("Failed to remember filter")?;
        self.show_random();
        Ok(())
    }

    /// Replace the collection wholesale after a sync merge.
    pub async fn replace_with(&mut self, merged: Vec<Quote>) -> Result<()> {
        self.quotes = merged;
        self.save().await.context("Failed to save merged collection")?;
        self.refresh_category_options();
        Ok(())
    }
}
