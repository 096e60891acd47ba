//! Driving port for account sign-up and sign-in.
//!
//! The GraphQL mutations call this port; they never see the user store, the
//! hasher, or the token issuer directly.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Credentials, Error};

/// Domain use-case port for account access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register a new account and issue a token for it.
    ///
    /// Fails with `AlreadyExists` when the email is taken.
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthenticatedUser, Error>;

    /// Check credentials against the stored account and issue a token.
    ///
    /// Fails with `NotFound` for an unknown email and `InvalidCredentials`
    /// for a wrong password.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthenticatedUser, Error>;
}
