use crate::model::{LoginRequest, RegisterRequest};
use crate::repository::AuthRepository;

use super::{Submitting, ViewState};

/// Where the app goes after start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

pub struct SplashScreen {
    repo: AuthRepository,
}

impl SplashScreen {
    pub fn new(repo: AuthRepository) -> Self {
        Self { repo }
    }

    /// Probe the session and pick the first screen.
    pub async fn route(&self) -> Route {
        if self.repo.is_authorized().await {
            Route::Home
        } else {
            Route::Login
        }
    }
}

pub struct LoginScreen {
    repo: AuthRepository,
    pub state: ViewState<bool>,
    submitting: Submitting,
}

impl LoginScreen {
    pub fn new(repo: AuthRepository) -> Self {
        Self {
            repo,
            state: ViewState::default(),
            submitting: Submitting::default(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_active()
    }

    pub async fn submit(&mut self, email: &str, password: &str) -> bool {
        let req = LoginRequest::new(email, password);
        if let Err(e) = req.validate() {
            self.state.fail(format!("Ошибка входа: {e}"));
            return false;
        }
        let Some(_guard) = self.submitting.begin() else {
            return false;
        };
        self.state.error = None;
        let result = self.repo.login(&req).await;
        match result {
            Ok(()) => self.state.complete(Ok(true)),
            Err(e) => {
                self.state.fail(format!("Ошибка входа: {e}"));
                false
            }
        }
    }
}

pub struct RegisterScreen {
    repo: AuthRepository,
    pub state: ViewState<bool>,
    submitting: Submitting,
}

impl RegisterScreen {
    pub fn new(repo: AuthRepository) -> Self {
        Self {
            repo,
            state: ViewState::default(),
            submitting: Submitting::default(),
        }
    }

    pub async fn submit(&mut self, email: &str, password: &str, name: &str) -> bool {
        let req = RegisterRequest::new(email, password, name);
        if let Err(e) = req.validate() {
            self.state.fail(format!("Ошибка регистрации: {e}"));
            return false;
        }
        let Some(_guard) = self.submitting.begin() else {
            return false;
        };
        self.state.error = None;
        let result = self.repo.register(&req).await;
        match result {
            Ok(()) => self.state.complete(Ok(true)),
            Err(e) => {
                self.state.fail(format!("Ошибка регистрации: {e}"));
                false
            }
        }
    }
}
