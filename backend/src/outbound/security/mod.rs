//! Credential hashing and token signing adapters.

mod bcrypt_hasher;
mod jwt_token_issuer;

pub use bcrypt_hasher::{BcryptPasswordHasher, DEFAULT_BCRYPT_COST};
pub use jwt_token_issuer::{AccessClaims, JwtTokenIssuer, TOKEN_TTL_SECONDS};
