//! # GoalHabit Core Library
//!
//! Client-side logic for the GoalHabit goal and habit tracker. All data
//! lives on a remote REST server; this crate talks to it and keeps the
//! per-screen presentation state a frontend (the `goalhabit` CLI, or any
//! GUI) renders.
//!
//! ## Architecture
//!
//! - **Model**: wire types and their derived presentation values (cadence
//!   labels, progress percentages, friendship actions)
//! - **Api**: HTTP/JSON transport with bearer-token authentication
//! - **Repository**: one typed method per endpoint
//! - **Screen**: load/mutate/reload state machines per screen
//! - **Storage**: TOML configuration and session token persistence
//! - **Reminder**: daily progress reminder
//!
//! ## Key Components
//!
//! - [`ApiClient`]: Shared transport
//! - [`Repositories`]: All repositories over one client
//! - [`Config`]: Application configuration management
//! - [`TokenStore`]: Trait for session token persistence

pub mod api;
pub mod error;
pub mod model;
pub mod reminder;
pub mod repository;
pub mod screen;
pub mod storage;

pub use api::ApiClient;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use model::*;
pub use reminder::{next_fire, LogNotifier, Notifier, ReminderScheduler};
pub use repository::Repositories;
pub use storage::{Config, KeyringTokenStore, MemoryTokenStore, TokenStore};
