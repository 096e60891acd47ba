//! Bearer token issuance port.
//!
//! Tokens are opaque to the domain: nothing in this service parses or verifies
//! them after issuance.

use crate::domain::{AccessToken, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised while issuing a token.
    pub enum TokenIssueError {
        /// Signing the claims failed.
        Signing { message: String } => "token signing failed: {message}",
        /// The signing secret is missing or empty.
        MissingSecret => "token signing secret is not configured",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Issue a signed token for `subject` that expires one hour from now.
    fn issue(&self, subject: &UserId) -> Result<AccessToken, TokenIssueError>;
}
