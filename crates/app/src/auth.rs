//! Login form validation and the session credential check.
//!
//! There is no real authentication here: credentials are compared against
//! configured values and a fixed placeholder token marks the session as
//! logged in. Nothing is signed, hashed, or persisted.

use serde::Deserialize;
use validator::Validate;

use eventdesk_core::error::{validation_error, CoreError};

use crate::config::AppConfig;

/// The placeholder token issued on every successful login.
pub const FAKE_TOKEN: &str = "fake-jwt-token";

/// Login form payload.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Holds the logged-in state for one panel session.
#[derive(Debug)]
pub struct AuthService {
    admin_email: String,
    admin_password: String,
    token: Option<String>,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
            token: None,
        }
    }

    /// Validate the form, check credentials, and mark the session logged in.
    ///
    /// Field validation runs before the credential comparison, so a
    /// malformed e-mail is a [`CoreError::Validation`] even when the
    /// password is also wrong.
    pub fn login(&mut self, form: &LoginForm) -> Result<&'static str, CoreError> {
        form.validate().map_err(|e| validation_error(&e))?;

        if form.email == self.admin_email && form.password == self.admin_password {
            self.token = Some(FAKE_TOKEN.to_string());
            Ok(FAKE_TOKEN)
        } else {
            Err(CoreError::Unauthorized(
                "Invalid credentials. Try again.".to_string(),
            ))
        }
    }

    /// Whether a login has succeeded and not been logged out.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The current session token, when logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Clear the session token. Idempotent.
    pub fn logout(&mut self) {
        self.token = None;
    }
}
