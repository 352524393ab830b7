//! Configuration Module - TOML-based App Configuration
//!
//! Loads and validates configuration from `config.toml`. Timer
//! intervals, simulated network delays, storage locations, and the
//! health bind address are all externalized here - nothing is hardcoded
//! in the domain layer.

pub mod loader;

use serde::Deserialize;

/// Top-level application configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before any adapter is constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// App identity and logging.
  pub app: AppSection,
  /// Periodic sync parameters.
  pub sync: SyncSection,
  /// Simulated server parameters.
  pub remote: RemoteSection,
  /// Storage locations.
  pub persistence: PersistenceSection,
  /// Health endpoint configuration.
  pub health: HealthSection,
}

/// App identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable app name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Periodic sync configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncSection {
  /// Seconds between periodic sync ticks.
  #[serde(default = "default_sync_interval")]
  pub interval_seconds: u64,
}

/// Simulated server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSection {
  /// Artificial delay before a fetch completes (milliseconds).
  #[serde(default = "default_fetch_delay")]
  pub fetch_delay_ms: u64,
  /// Artificial delay before a post completes (milliseconds).
  #[serde(default = "default_post_delay")]
  pub post_delay_ms: u64,
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceSection {
  /// Directory for quotes.json and prefs.json.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
  /// File name for JSON exports, written into the data directory.
  #[serde(default = "default_export_file")]
  pub export_file: String,
}

/// Health endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthSection {
  /// Enable the /live and /ready endpoints.
  #[serde(default = "default_true")]
  pub enabled: bool,
  /// Health server bind address.
  #[serde(default = "default_health_addr")]
  pub bind_address: String,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_sync_interval() -> u64 {
  60
}

fn default_fetch_delay() -> u64 {
  1_000
}

fn default_post_delay() -> u64 {
  500
}

fn default_data_dir() -> String {
  "data".to_string()
}

fn default_export_file() -> String {
  "quotes_export.json".to_string()
}

fn default_true() -> bool {
  true
}

fn default_health_addr() -> String {
  "127.0.0.1:9090".to_string()
}
