//! Authenticated session state

use std::fmt;

use crate::error::{Result, TableauError};

/// Personal access token credential pair
#[derive(Clone)]
pub struct PersonalAccessToken {
    pub name: String,
    pub secret: String,
}

impl PersonalAccessToken {
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
        }
    }
}

// Keep the secret out of debug logs
impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalAccessToken")
            .field("name", &self.name)
            .field("secret", &"***")
            .finish()
    }
}

/// Token and site id held between sign-in and sign-out
#[derive(Debug, Default, Clone)]
pub struct Session {
    token: Option<String>,
    site_id: Option<String>,
}

impl Session {
    /// Create an empty (signed out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the values returned by sign-in
    pub fn start(&mut self, token: String, site_id: String) {
        self.token = Some(token);
        self.site_id = Some(site_id);
    }

    /// Forget token and site id
    pub fn clear(&mut self) {
        self.token = None;
        self.site_id = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    /// True when both token and site id are present and non-empty
    pub fn is_signed_in(&self) -> bool {
        self.active().is_ok()
    }

    /// Return `(token, site_id)` or an `IllegalState` error when not signed in
    pub fn active(&self) -> Result<(&str, &str)> {
        match (self.token(), self.site_id()) {
            (Some(token), Some(site_id)) if !token.is_empty() && !site_id.is_empty() => {
                Ok((token, site_id))
            }
            _ => Err(TableauError::IllegalState("Not signed in".to_string())),
        }
    }
}
