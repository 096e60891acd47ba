//! bcrypt implementation of [`PasswordHasher`].

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Salted bcrypt hasher with a fixed work factor.
///
/// # Examples
/// ```
/// use hotel_api::domain::ports::PasswordHasher;
/// use hotel_api::outbound::security::BcryptPasswordHasher;
///
/// let hasher = BcryptPasswordHasher::new(4);
/// let digest = hasher.hash("pw").unwrap();
/// assert!(hasher.verify("pw", &digest));
/// assert!(!hasher.verify("other", &digest));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Hasher using `cost` rounds (4 to 31).
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured work factor.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError> {
        let digest = bcrypt::hash(plaintext, self.cost)
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        PasswordHash::new(digest)
            .map_err(|_| PasswordHashError::hashing("hasher produced an empty digest"))
    }

    fn verify(&self, plaintext: &str, digest: &PasswordHash) -> bool {
        bcrypt::verify(plaintext, digest.as_ref()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::new(4)
    }

    #[rstest]
    fn default_cost_is_ten() {
        assert_eq!(BcryptPasswordHasher::default().cost(), 10);
    }

    #[rstest]
    fn digests_are_salted(hasher: BcryptPasswordHasher) {
        let first = hasher.hash("pw").expect("hash");
        let second = hasher.hash("pw").expect("hash");

        assert_ne!(first.as_ref(), second.as_ref());
        assert!(hasher.verify("pw", &first));
        assert!(hasher.verify("pw", &second));
    }

    #[rstest]
    fn wrong_password_does_not_verify(hasher: BcryptPasswordHasher) {
        let digest = hasher.hash("pw").expect("hash");
        assert!(!hasher.verify("pW", &digest));
    }

    #[rstest]
    #[case("not-a-bcrypt-digest")]
    #[case("$2b$04$short")]
    fn malformed_digest_is_a_mismatch(hasher: BcryptPasswordHasher, #[case] raw: &str) {
        let digest = PasswordHash::new(raw).expect("non-empty digest");
        assert!(!hasher.verify("pw", &digest));
    }

    #[rstest]
    fn out_of_range_cost_fails() {
        let err = BcryptPasswordHasher::new(2).hash("pw").expect_err("cost too low");
        assert!(matches!(err, PasswordHashError::Hashing { .. }));
    }
}
