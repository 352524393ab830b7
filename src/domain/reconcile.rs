//! Reconciler - Remote-Precedence Merge
//!
//! Merges the local quote collection with the collection reported by the
//! server. The policy is last-writer-wins-by-source: the remote sequence
//! forms the authoritative prefix of the result, and local quotes with no
//! structural counterpart on the remote are appended behind it in their
//! original relative order. Nothing is ever dropped.
//!
//! A quote deleted on the remote but still present locally cannot be told
//! apart from a genuine local addition, so it survives the merge. That is
//! inherited behavior, kept on purpose (see DESIGN.md).

use serde::Serialize;

use super::quote::Quote;

/// Outcome of a single reconciliation pass.
#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    /// Remote quotes in remote order, then local-only quotes.
    pub merged: Vec<Quote>,
    /// True iff at least one local quote was absent from the remote.
    pub conflict: bool,
    /// Number of local-only quotes appended to the remote prefix.
    pub local_additions: usize,
    /// True iff the remote was strictly larger than the pre-merge local
    /// collection. Only used for messaging, never for merge decisions.
    pub remote_ahead: bool,
}

/// User-visible summary of a reconciliation, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncSummary {
    /// Local-only quotes were kept; the server data took precedence.
    MergedLocalAdditions(usize),
    /// The server had quotes the local collection lacked, nothing local
    /// was in conflict.
    RemoteAhead(usize),
    /// Collections already agreed.
    UpToDate,
}

impl Reconciliation {
    /// Classify this result for the notification system.
    ///
    /// Conflict wins over the remote-ahead case, which wins over the
    /// up-to-date case.
    pub fn summary(&self, local_len_before: usize) -> SyncSummary {
        if self.conflict {
            SyncSummary::MergedLocalAdditions(self.local_additions)
        } else if self.remote_ahead {
            SyncSummary::RemoteAhead(self.merged.len() - local_len_before)
        } else {
            SyncSummary::UpToDate
        }
    }
}

/// Merge `local` into `remote` with remote precedence.
///
/// 1. `local_only` = quotes in `local` with no structurally-equal
///    counterpart anywhere in `remote`, order preserved.
/// 2. `merged` = `remote` as given, followed by `local_only`.
/// 3. `conflict` iff `local_only` is non-empty.
///
/// Never fails; both inputs are in-memory sequences. Linear scans are
/// plenty here, the collections are tiny.
pub fn reconcile(local: &[Quote], remote: &[Quote]) -> Reconciliation {
    let local_only: Vec<Quote> = local
        .iter()
        .filter(|candidate| !remote.contains(candidate))
        .cloned()
        .collect();

    let conflict = !local_only.is_empty();
    let local_additions = local_only.len();

    let mut merged = remote.to_vec();
    merged.extend(local_only);

    Reconciliation {
        merged,
        conflict,
        local_additions,
        remote_ahead: remote.len() > local.len(),
    }
}
