//! Store Port - Quote Persistence Interface
//!
//! Defines the trait the use cases require for persisting the quote
//! collection. Two tiers with different lifetimes:
//! - durable: the collection itself and the last selected category
//!   filter, surviving restarts
//! - ephemeral: the last-viewed quote index, alive only for the current
//!   process (the session)

use async_trait::async_trait;

use crate::domain::quote::Quote;

/// Trait for quote persistence providers.
///
/// `load` must fall back to the fixed seed collection when nothing has
/// been persisted yet, and persist that seed immediately so a following
/// `load` observes the same data.
#[async_trait]
pub trait QuoteStore: Send + Sync + 'static {
  /// Load the persisted collection, seeding it on first use.
  async fn load(&self) -> anyhow::Result<Vec<Quote>>;

  /// Overwrite the persisted collection. Idempotent.
  async fn save(&self, quotes: &[Quote]) -> anyhow::Result<()>;

  /// Durably remember the selected category filter.
  async fn remember_filter(&self, category: &str) -> anyhow::Result<()>;

  /// Last durably remembered category filter, if any.
  async fn last_filter(&self) -> anyhow::Result<Option<String>>;

  /// Ephemerally remember the index of the quote last shown.
  fn remember_last_viewed(&self, index: usize);

  /// Last ephemerally remembered index, if any this session.
  fn last_viewed(&self) -> Option<usize>;

  /// Check if the backing storage is usable (directory, permissions).
  async fn is_healthy(&self) -> bool;
}
