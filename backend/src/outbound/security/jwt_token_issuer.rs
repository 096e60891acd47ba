//! HS256 JWT implementation of [`TokenIssuer`].

use std::sync::Arc;

use jsonwebtoken::{EncodingKey, Header, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{TokenIssueError, TokenIssuer};
use crate::domain::{AccessToken, UserId};

/// Lifetime of an issued token.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject user id.
    pub id: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Signs [`AccessClaims`] with a process-wide HMAC secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    key: EncodingKey,
    clock: Arc<dyn Clock>,
}

impl JwtTokenIssuer {
    /// Build an issuer for `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssueError::MissingSecret`] when `secret` is empty.
    pub fn new(secret: &str, clock: Arc<dyn Clock>) -> Result<Self, TokenIssueError> {
        if secret.is_empty() {
            return Err(TokenIssueError::missing_secret());
        }
        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            clock,
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &UserId) -> Result<AccessToken, TokenIssueError> {
        let iat = self.clock.utc().timestamp();
        let claims = AccessClaims {
            id: subject.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECONDS,
        };
        encode(&Header::default(), &claims, &self.key)
            .map(AccessToken::new)
            .map_err(|err| TokenIssueError::signing(err.to_string()))
    }
}
