//! Presentation state for each screen.
//!
//! Every screen follows the same cycle: load on entry, keep the last good
//! data, record failures as a message, and reload the whole list after any
//! successful mutation. Nothing is merged locally; the server's current state
//! is always what is shown. Concurrent reloads are not de-duplicated, so the
//! last response to arrive wins.

pub mod auth;
pub mod friends;
pub mod goals;
pub mod habits;
pub mod profile;
pub mod steps;
pub mod templates;

pub use auth::{LoginScreen, RegisterScreen, Route, SplashScreen};
pub use friends::{FriendProfileScreen, FriendsScreen, FriendsView};
pub use goals::{GoalFormScreen, GoalsScreen};
pub use habits::{HabitFormScreen, HabitsScreen};
pub use profile::ProfileScreen;
pub use steps::GoalStepsScreen;
pub use templates::TemplatesScreen;

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::Result;

/// Transient view state: loading flag, last error, last info message and the
/// most recently loaded data.
#[derive(Debug, Clone, Default)]
pub struct ViewState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    pub info: Option<String>,
}

impl<T> ViewState<T> {
    /// Begin a load: show the spinner and forget the previous error.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Finish a load. On failure the previous data stays in place.
    pub fn complete(&mut self, result: Result<T>) -> bool {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                true
            }
            Err(e) => {
                if e.is_validation() {
                    tracing::debug!("rejected before sending: {}", e);
                } else {
                    tracing::warn!("load failed: {}", e);
                }
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn fail(&mut self, message: impl Display) {
        self.loading = false;
        self.error = Some(message.to_string());
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.info = Some(message.into());
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// In-flight flag disabling a control while its request runs. The flag is
/// owned by the [`SubmitGuard`] returned from [`Submitting::begin`] and clears
/// when the guard drops, so a cancelled submit never leaves it set.
#[derive(Debug, Clone, Default)]
pub struct Submitting(Arc<AtomicBool>);

impl Submitting {
    /// `None` when a submission is already running.
    pub fn begin(&self) -> Option<SubmitGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(SubmitGuard(Arc::clone(&self.0)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct SubmitGuard(Arc<AtomicBool>);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
