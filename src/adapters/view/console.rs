//! Console View - Terminal Rendering Adapter
//!
//! Implements the `View` port on stdout. Diagnostics go through
//! `tracing` on stderr, so the quote display and the logs never
//! interleave on the same stream.

use crate::domain::quote::Quote;
use crate::ports::view::{Notice, View};

/// Terminal view writing to stdout.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ConsoleView {
    fn render(&self, quote: &Quote) {
        println!("\n  \"{}\"", quote.text);
        println!("      — Category: {}\n", quote.category);
    }

    fn render_empty(&self, category: &str) {
        println!("\n  No quotes found for category: {category}\n");
    }

    fn populate_category_options(&self, categories: &[String]) {
        println!("  Categories: all, {}", categories.join(", "));
    }

    fn notify(&self, notice: &Notice) {
        println!("  [{notice}]");
    }
}
