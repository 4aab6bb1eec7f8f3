//! Client-side login session.
//!
//! There is no server check: logging in validates the form and flips the
//! session to logged in. Nothing is persisted, so every process starts
//! logged out.

use parking_lot::RwLock;
use tracing::info;

use crate::core::error::Result;
use crate::utils::validation::{validate_email, validate_password};

#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate credentials and mark the session logged in.
    pub fn login(&self, email: &str, password: &str) -> Result<()> {
        validate_email(email.trim()).into_result()?;
        validate_password(password).into_result()?;

        *self.user.write() = Some(email.trim().to_string());
        info!(email = %email.trim(), "User logged in");
        Ok(())
    }

    pub fn logout(&self) {
        if let Some(email) = self.user.write().take() {
            info!(email = %email, "User logged out");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn user_email(&self) -> Option<String> {
        self.user.read().clone()
    }
}
