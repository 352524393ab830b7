//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use cases require from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `QuoteStore`: durable collection + filter persistence, ephemeral
//!   last-viewed index
//! - `RemoteSource`: the simulated server (fetch + post)
//! - `View`: rendering and notification capability

pub mod remote;
pub mod store;
pub mod view;
