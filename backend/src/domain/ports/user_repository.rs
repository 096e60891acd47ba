//! Port abstraction for the Users collection.
//!
//! Adapters look users up by email and insert new ones. Inserting enforces
//! email uniqueness atomically: a second insert for the same email fails with
//! [`UserPersistenceError::DuplicateEmail`] even when two sign-ups race past
//! the service's existence check.
use async_trait::async_trait;

use crate::domain::{Email, NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A user with the same email is already stored.
        DuplicateEmail => "user email already stored",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user registered under `email` (case-sensitive exact match).
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new user and return the stored record with its assigned id.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
