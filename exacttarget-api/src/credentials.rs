//! API account credentials

use std::fmt;

use crate::error::{ApiError, Result};

/// Environment variable holding the API username
pub const USERNAME_ENV: &str = "EXACTTARGET_USERNAME";

/// Environment variable holding the API password
pub const PASSWORD_ENV: &str = "EXACTTARGET_PASSWORD";

/// Username and password sent in the authorization block of every envelope
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `EXACTTARGET_USERNAME` and `EXACTTARGET_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(require_env(USERNAME_ENV)?, require_env(PASSWORD_ENV)?))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Same username with the password masked, for logging envelopes
    pub(crate) fn redacted(&self) -> Self {
        Self::new(self.username.clone(), "<redacted>")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::ConfigError(format!("{} is not set", name))),
    }
}
