//! Credential hashing port.
//!
//! Hashing is CPU-bound and synchronous; callers on the async runtime move it
//! onto the blocking pool.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised while hashing a password.
    pub enum PasswordHashError {
        /// The hashing backend rejected the input or its parameters.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way digest of `plaintext`.
    ///
    /// Implementations must fail rather than return an empty digest.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `plaintext` against `digest`.
    ///
    /// A malformed digest is a mismatch, never an error.
    fn verify(&self, plaintext: &str, digest: &PasswordHash) -> bool;
}
