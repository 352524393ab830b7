//! Core quote domain type.
//!
//! A `Quote` is a plain `{text, category}` record. Two quotes are equal
//! iff both fields are equal, case-sensitive, with no normalization.
//! There is no identifier beyond this structural equality: two distinct
//! quotes with identical text and category are indistinguishable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for user-entered quotes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Quote text was empty after trimming.
    #[error("quote text must not be empty")]
    EmptyText,
    /// Quote category was empty after trimming.
    #[error("quote category must not be empty")]
    EmptyCategory,
}

/// A single quote record.
///
/// Equality is structural over both fields. Serializes to the JSON
/// object `{"text": ..., "category": ...}` used by the persistence
/// layer, the export/import format, and the simulated server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub text: String,
    /// Free-form category label.
    pub category: String,
}

impl Quote {
    /// Build a quote from user input.
    ///
    /// Both fields are trimmed; an empty result in either is rejected
    /// without mutating anything.
    pub fn new(text: &str, category: &str) -> Result<Self, QuoteError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(QuoteError::EmptyText);
        }
        if category.is_empty() {
            return Err(QuoteError::EmptyCategory);
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" — {}", self.text, self.category)
    }
}

/// Fixed seed collection used when no persisted state exists yet.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The only way to do great work is to love what you do.".to_string(),
            category: "Work".to_string(),
        },
        Quote {
            text: "Strive not to be a success, but rather to be of value.".to_string(),
            category: "Value".to_string(),
        },
        Quote {
            text: "The future belongs to those who believe in the beauty of their dreams."
                .to_string(),
            category: "Dreams".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_input() {
        let quote = Quote::new("  stay hungry  ", " Life ").unwrap();
        assert_eq!(quote.text, "stay hungry");
        assert_eq!(quote.category, "Life");
    }

    #[test]
    fn test_new_rejects_empty_text() {
        assert_eq!(Quote::new("   ", "Life"), Err(QuoteError::EmptyText));
    }

    #[test]
    fn test_new_rejects_empty_category() {
        assert_eq!(Quote::new("stay hungry", ""), Err(QuoteError::EmptyCategory));
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = Quote::new("A", "x").unwrap();
        let b = Quote::new("a", "x").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_json_shape() {
        let quote = Quote::new("A", "x").unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json, serde_json::json!({"text": "A", "category": "x"}));
    }

    #[test]
    fn test_seed_has_three_distinct_quotes() {
        let seed = seed_quotes();
        assert_eq!(seed.len(), 3);
        assert_ne!(seed[0], seed[1]);
        assert_ne!(seed[1], seed[2]);
    }
}
