//! Category catalog and filtered quote selection.
//!
//! Derives the distinct category list from a collection (first-occurrence
//! order, blanks excluded) and picks uniformly random quotes from the
//! subset matching a selected category.

use rand::Rng;

use super::quote::Quote;

/// Sentinel string selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// A category selection: the `"all"` sentinel or one exact label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every quote.
    All,
    /// Match quotes whose category equals this string exactly.
    Named(String),
}

impl CategoryFilter {
    /// Parse a user-supplied selection; the exact string `"all"` is the
    /// wildcard, anything else names a category verbatim.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(raw.to_string())
        }
    }

    /// Whether a quote passes this filter.
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Named(category) => quote.category == *category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_CATEGORIES}"),
            Self::Named(category) => write!(f, "{category}"),
        }
    }
}

/// Distinct categories in first-occurrence order.
///
/// Blank or whitespace-only categories are excluded from the list even
/// though the quotes carrying them remain in the collection.
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = Vec::new();
    for quote in quotes {
        if quote.category.trim().is_empty() {
            continue;
        }
        if !seen.contains(&quote.category) {
            seen.push(quote.category.clone());
        }
    }
    seen
}

/// Indices of quotes matching the filter, in collection order.
pub fn matching_indices(quotes: &[Quote], filter: &CategoryFilter) -> Vec<usize> {
    quotes
        .iter()
        .enumerate()
        .filter(|(_, quote)| filter.matches(quote))
        .map(|(index, _)| index)
        .collect()
}

/// Uniformly random index of a quote matching the filter.
///
/// The returned index points into the full collection so the caller can
/// remember it as the last-viewed position. `None` signals "no matches".
pub fn pick_random(quotes: &[Quote], filter: &CategoryFilter) -> Option<usize> {
    let candidates = matching_indices(quotes, filter);
    if candidates.is_empty() {
        return None;
    }
    let choice = rand::thread_rng().gen_range(0..candidates.len());
    Some(candidates[choice])
}
