//! View Port - Rendering Capability Interface
//!
//! The core never touches a screen directly; it calls into this injected
//! capability. The shipped adapter writes to the terminal, but anything
//! that can show a quote and a one-line notice qualifies.

use crate::domain::quote::Quote;
use crate::domain::reconcile::SyncSummary;

/// User-visible notifications emitted by the use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  /// Outcome of a completed synchronization.
  SyncCompleted(SyncSummary),
  /// Synchronization failed; local state was left unchanged.
  SyncFailed,
  /// A sync request arrived while another was still in flight.
  SyncAlreadyRunning,
  /// A quote was added and saved.
  QuoteAdded(Quote),
  /// Quotes were imported from a JSON payload.
  Imported(usize),
  /// The collection was exported.
  Exported { count: usize, path: String },
  /// User input was rejected before any mutation.
  Invalid(String),
}

impl std::fmt::Display for Notice {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::SyncCompleted(SyncSummary::MergedLocalAdditions(count)) => write!(
        f,
        "Sync complete: {count} local addition(s) merged, server data took precedence."
      ),
      Self::SyncCompleted(SyncSummary::RemoteAhead(count)) => {
        write!(f, "Sync complete: found {count} new quote(s) from server.")
      }
      Self::SyncCompleted(SyncSummary::UpToDate) => {
        write!(f, "Sync complete: local data is up-to-date.")
      }
      Self::SyncFailed => write!(f, "Sync failed. Check the server connection."),
      Self::SyncAlreadyRunning => {
        write!(f, "Sync already running, request ignored.")
      }
      Self::QuoteAdded(quote) => {
        write!(f, "Added and saved: {quote}")
      }
      Self::Imported(count) => write!(f, "Successfully imported {count} quote(s)."),
      Self::Exported { count, path } => {
        write!(f, "Exported {count} quote(s) to {path}.")
      }
      Self::Invalid(reason) => write!(f, "{reason}"),
    }
  }
}

/// Trait for rendering capabilities injected into the core.
pub trait View: Send + Sync + 'static {
  /// Show a single quote.
  fn render(&self, quote: &Quote);

  /// Show the "no matches" state for a category selection.
  fn render_empty(&self, category: &str);

  /// Refresh the selectable category list.
  fn populate_category_options(&self, categories: &[String]);

  /// Surface a one-line notification.
  fn notify(&self, notice: &Notice);
}
