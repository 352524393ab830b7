//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure: file I/O, the in-memory simulated server, terminal
//! output, and the health endpoints.
//!
//! Adapter categories:
//! - `persistence`: atomic JSON file storage for quotes and prefs
//! - `remote`: the simulated server with artificial delays
//! - `view`: terminal rendering
//! - `health`: axum liveness/readiness probes

pub mod health;
pub mod persistence;
pub mod remote;
pub mod view;
