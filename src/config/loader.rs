//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters, and
//! providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  info!(
    name = %config.app.name,
    sync_interval = config.sync.interval_seconds,
    data_dir = %config.persistence.data_dir,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(!config.app.name.is_empty(), "App name must not be empty");

  anyhow::ensure!(
    config.sync.interval_seconds > 0,
    "Sync interval must be positive, got {}",
    config.sync.interval_seconds
  );

  // Delays longer than a minute would starve the periodic tick.
  anyhow::ensure!(
    config.remote.fetch_delay_ms <= 60_000,
    "Fetch delay must be at most 60000 ms, got {}",
    config.remote.fetch_delay_ms
  );
  anyhow::ensure!(
    config.remote.post_delay_ms <= 60_000,
    "Post delay must be at most 60000 ms, got {}",
    config.remote.post_delay_ms
  );

  anyhow::ensure!(
    !config.persistence.data_dir.is_empty(),
    "Data directory must not be empty"
  );
  anyhow::ensure!(
    !config.persistence.export_file.is_empty(),
    "Export file name must not be empty"
  );

  if config.health.enabled {
    anyhow::ensure!(
      config.health.bind_address.parse::<std::net::SocketAddr>().is_ok(),
      "Health bind address is not a valid socket address: {}",
      config.health.bind_address
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_minimal_config_fills_defaults() {
    let config: AppConfig = toml::from_str(
      r#"
      [app]
      name = "quotesync"

      [sync]

      [remote]

      [persistence]

      [health]
      "#,
    )
    .unwrap();

    assert!(validate_config(&config).is_ok());
    assert_eq!(config.sync.interval_seconds, 60);
    assert_eq!(config.remote.fetch_delay_ms, 1_000);
    assert_eq!(config.remote.post_delay_ms, 500);
    assert_eq!(config.persistence.export_file, "quotes_export.json");
  }

  #[test]
  fn test_zero_interval_rejected() {
    let config: AppConfig = toml::from_str(
      r#"
      [app]
      name = "quotesync"

      [sync]
      interval_seconds = 0

      [remote]

      [persistence]

      [health]
      "#,
    )
    .unwrap();

    assert!(validate_config(&config).is_err());
  }
}
