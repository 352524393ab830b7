//! Remote Port - Simulated Server Interface
//!
//! Defines the trait for the remote quote source the sync engine talks
//! to. There is no real transport behind it: the shipped adapter is an
//! in-memory collection with artificial delays, but the use cases never
//! know that.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::quote::Quote;

/// Acknowledgement returned by a remote post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAck {
  /// Whether the server accepted the quote.
  pub accepted: bool,
}

/// Trait for remote quote sources.
#[async_trait]
pub trait RemoteSource: Send + Sync + 'static {
  /// Fetch the full remote collection.
  ///
  /// Takes on the order of a second against the simulated server.
  async fn fetch_quotes(&self) -> anyhow::Result<Vec<Quote>>;

  /// Push one locally added quote to the remote collection.
  async fn post_quote(&self, quote: &Quote) -> anyhow::Result<RemoteAck>;

  /// Check if the remote is reachable.
  async fn is_healthy(&self) -> bool;
}
