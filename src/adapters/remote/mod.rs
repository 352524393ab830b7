//! Remote adapters.

pub mod server;

pub use server::{SimulatedServer, server_seed_quotes};
