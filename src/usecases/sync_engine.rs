//! Sync Engine - Guarded Local/Remote Reconciliation Loop
//!
//! Drives synchronization against the remote source, both on demand and
//! on a fixed periodic tick. All mutation flows through the shared
//! `QuoteBook`, and an in-flight guard serializes sync requests: a
//! request arriving while another sync is still waiting on the remote is
//! skipped, not queued, so a slow fetch can never race a second merge
//! over the shared collection.
//!
//! A failed fetch skips reconciliation entirely and leaves local state
//! unchanged; the next periodic tick is the only retry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, broadcast};
use tracing::{info, instrument, warn};

use crate::domain::reconcile::{SyncSummary, reconcile};
use crate::ports::remote::RemoteSource;
use crate::ports::store::QuoteStore;
use crate::ports::view::{Notice, View};
use crate::usecases::quote_book::QuoteBook;

/// Result of a single sync request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Reconciliation ran and the merged collection was applied.
    Completed(SyncSummary),
    /// Another sync was still in flight; this request was dropped.
    SkippedInFlight,
    /// The remote fetch or the merge persistence failed.
    Failed,
}

/// Periodic and on-demand sync orchestrator.
pub struct SyncEngine<S: QuoteStore, R: RemoteSource, V: View> {
    /// Shared application state.
    book: Arc<Mutex<QuoteBook<S, R, V>>>,
    /// Remote quote source.
    remote: Arc<R>,
    /// Injected rendering capability, for sync notices.
    view: Arc<V>,
    /// In-flight guard. Set for the whole fetch-reconcile-apply span.
    in_flight: AtomicBool,
    /// Tick interval for the periodic loop.
    interval: Duration,
}

impl<S: QuoteStore, R: RemoteSource, V: View> SyncEngine<S, R, V> {
    /// Create a new engine over the shared book.
    pub fn new(
        book: Arc<Mutex<QuoteBook<S, R, V>>>,
        remote: Arc<R>,
        view: Arc<V>,
        interval: Duration,
    ) -> Self {
        Self {
            book,
            remote,
            view,
            in_flight: AtomicBool::new(false),
            interval,
        }
    }

    /// Run one guarded sync.
    ///
    /// The remote fetch happens without holding the book lock, so user
    /// actions stay responsive during the simulated network delay. Local
    /// quotes added meanwhile are picked up by the reconcile pass as
    /// local additions.
    #[instrument(skip(self), name = "sync")]
    pub async fn sync_once(&self) -> SyncOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Sync requested while another is in flight, skipping");
            self.view.notify(&Notice::SyncAlreadyRunning);
            return SyncOutcome::SkippedInFlight;
        }

        let outcome = self.fetch_and_merge().await;
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn fetch_and_merge(&self) -> SyncOutcome {
        let fetched = match self.remote.fetch_quotes().await {
            Ok(quotes) => quotes,
            Err(error) => {
                warn!(error = %error, "Remote fetch failed, local state unchanged");
                self.view.notify(&Notice::SyncFailed);
                return SyncOutcome::Failed;
            }
        };

        let mut book = self.book.lock().await;
        let local_len = book.quotes().len();
        let result = reconcile(book.quotes(), &fetched);
        let summary = result.summary(local_len);

        if let Err(error) = book.replace_with(result.merged).await {
            warn!(error = %error, "Failed to persist merged collection");
            self.view.notify(&Notice::SyncFailed);
            return SyncOutcome::Failed;
        }

        info!(
            local_before = local_len,
            remote = fetched.len(),
            merged = book.quotes().len(),
            conflict = result.conflict,
            "Sync completed"
        );

        self.view.notify(&Notice::SyncCompleted(summary));
        SyncOutcome::Completed(summary)
    }

    /// Run the periodic sync loop until shutdown.
    ///
    /// The first sync fires one full interval after startup, matching a
    /// plain recurring timer. Missed ticks are skipped rather than
    /// bursted.
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // interval's first tick completes immediately; consume it so the
        // loop waits a full period before the first sync.
        ticker.tick().await;

        info!(interval_secs = self.interval.as_secs(), "Periodic sync started");

        loop {
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => {
                    info!("Sync engine received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    self.sync_once().await;
                }
            }
        }
    }
}
