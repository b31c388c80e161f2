//! Identity of the current Telegram user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled once at startup from `/auth/me`. The header reads it for the user
//! badge and the tab bar reads it to decide whether the admin tab exists.
//!
//! ERROR HANDLING
//! ==============
//! A failed identity check is logged and treated as "not admin": the admin
//! tab stays hidden and the badge stays empty.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::Me;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub me: Option<Me>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn loading() -> Self {
        Self { me: None, loading: true }
    }

    /// Record the identity check result, failing closed on error.
    pub fn resolve(&mut self, result: Result<Me, ApiError>) {
        self.loading = false;
        self.me = match result {
            Ok(me) => Some(me),
            Err(e) => {
                log::warn!("identity check failed: {e}");
                None
            }
        };
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.me.as_ref().is_some_and(|me| me.is_admin)
    }

    #[must_use]
    pub fn badge(&self) -> String {
        self.me.as_ref().map(Me::badge).unwrap_or_default()
    }
}
