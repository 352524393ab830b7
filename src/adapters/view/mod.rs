//! View adapters.

pub mod console;

pub use console::ConsoleView;
