//! Session token persistence.
//!
//! The transport reads the token before every request, so implementations
//! must be cheap to query and safe to share across tasks.

use std::sync::Mutex;

use crate::error::{CoreError, Result};

const SERVICE: &str = "goalhabit";
const TOKEN_KEY: &str = "session_token";

pub trait TokenStore: Send + Sync {
    /// Current token, `None` when logged out.
    fn token(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token kept in the OS keyring.
pub struct KeyringTokenStore {
    service: String,
    key: String,
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new(SERVICE, TOKEN_KEY)
    }
}

impl KeyringTokenStore {
    pub fn new(service: &str, key: &str) -> Self {
        Self {
            service: service.to_string(),
            key: key.to_string(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry> {
        Ok(keyring::Entry::new(&self.service, &self.key)?)
    }
}

impl TokenStore for KeyringTokenStore {
    fn token(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        self.entry()?.set_password(token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token, lost on exit.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|e| CoreError::TokenStore(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| CoreError::TokenStore(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| CoreError::TokenStore(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
