mod config;
pub mod token_store;

pub use config::{ApiConfig, Config, LogConfig, ReminderConfig};
pub use token_store::{KeyringTokenStore, MemoryTokenStore, TokenStore};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/goalhabit[-dev]/` based on GOALHABIT_ENV.
///
/// Set GOALHABIT_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(".config");

    let env = std::env::var("GOALHABIT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("goalhabit-dev")
    } else {
        base_dir.join("goalhabit")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
