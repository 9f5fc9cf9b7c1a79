//! Subcommand implementations. Each command drives the matching core screen
//! and prints its state.

pub mod auth;
pub mod config;
pub mod friends;
pub mod goals;
pub mod habits;
pub mod profile;
pub mod remind;
pub mod steps;
pub mod templates;

use goalhabit_core::screen::ViewState;
use goalhabit_core::{ApiClient, Config, KeyringTokenStore, Repositories};
use serde::Serialize;
use std::sync::Arc;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Repositories over the configured base URL, authenticated from the keyring.
pub fn repositories() -> Result<Repositories, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let api = ApiClient::new(&config.base_url(), Arc::new(KeyringTokenStore::default()))?;
    Ok(Repositories::new(api))
}

/// Turn a screen outcome into a command result, echoing its info message.
pub fn finish<T>(ok: bool, state: &ViewState<T>) -> CliResult {
    if !ok {
        let message = state
            .error
            .clone()
            .unwrap_or_else(|| "request was not sent".to_string());
        return Err(message.into());
    }
    if let Some(info) = &state.info {
        eprintln!("{info}");
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
