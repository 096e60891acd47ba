//! Account sign-up and sign-in service.
//!
//! Implements [`AccountCommand`] over a [`UserRepository`], a
//! [`PasswordHasher`], and a [`TokenIssuer`]. Hashing and verification are
//! CPU-bound, so both run on the blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::{
    AccountCommand, PasswordHashError, PasswordHasher, TokenIssueError, TokenIssuer,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    AuthenticatedUser, Credentials, Error, NewUser, PasswordHash, User,
};

pub(crate) const USER_EXISTS_MESSAGE: &str = "User already exists";
pub(crate) const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub(crate) const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Account service implementing the account driving port.
#[derive(Clone)]
pub struct AccountService<U> {
    users: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl<U> AccountService<U> {
    /// Create a new service from its collaborators.
    pub fn new(
        users: Arc<U>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

impl<U> AccountService<U>
where
    U: UserRepository,
{
    fn map_user_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateEmail => Error::already_exists(USER_EXISTS_MESSAGE),
        }
    }

    fn map_hash_error(error: PasswordHashError) -> Error {
        Error::internal(error.to_string())
    }

    fn map_token_error(error: TokenIssueError) -> Error {
        Error::internal(error.to_string())
    }

    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(Self::map_hash_error)
    }

    async fn verify_password(&self, password: &str, digest: &PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        let digest = digest.clone();
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &digest))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
    }

    fn authenticated(&self, user: &User) -> Result<AuthenticatedUser, Error> {
        let token = self
            .tokens
            .issue(user.id())
            .map_err(Self::map_token_error)?;
        Ok(AuthenticatedUser {
            id: user.id().clone(),
            email: user.email().clone(),
            token,
        })
    }
}

#[async_trait]
impl<U> AccountCommand for AccountService<U>
where
    U: UserRepository,
{
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthenticatedUser, Error> {
        let existing = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(Self::map_user_error)?;
        if existing.is_some() {
            return Err(Error::already_exists(USER_EXISTS_MESSAGE));
        }

        let password_hash = self.hash_password(credentials.password()).await?;
        let user = self
            .users
            .insert(&NewUser {
                email: credentials.email().clone(),
                password_hash,
            })
            .await
            .map_err(Self::map_user_error)?;
        debug!(user_id = %user.id(), "account created");

        self.authenticated(&user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthenticatedUser, Error> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))?;

        if !self
            .verify_password(credentials.password(), user.password_hash())
            .await?
        {
            debug!(user_id = %user.id(), "sign-in rejected");
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        }

        self.authenticated(&user)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
