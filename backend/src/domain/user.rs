//! User accounts.
//!
//! Users are created by sign-up and read by sign-in. The store owns every
//! record; the domain never caches one across calls.

use std::fmt;

use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The password digest was empty.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,
}

/// Store-assigned user identifier, kept in its textual UUID form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an identifier read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier, as a store does on insert.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address identifying an account or the owner of a booking.
///
/// Stored exactly as supplied; lookups are case-sensitive exact matches.
/// Only sign-up requires a non-blank address (see
/// [`Credentials::try_from_parts`](super::Credentials::try_from_parts)), so a
/// blank lookup simply matches nothing.
///
/// # Examples
/// ```
/// use hotel_api::domain::Email;
///
/// let email = Email::new("a@x.com");
/// assert_eq!(email.as_ref(), "a@x.com");
/// assert!(!email.is_blank());
/// assert!(Email::new("  ").is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Wrap a caller-supplied address verbatim.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Whether the address is empty once trimmed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-way password digest produced by a credential hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a digest, rejecting empty values.
    pub fn new(digest: impl Into<String>) -> Result<Self, UserValidationError> {
        let digest = digest.into();
        if digest.is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self(digest))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: PasswordHash,
}

impl User {
    /// Assemble a user from stored parts.
    #[must_use]
    pub const fn new(id: UserId, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Account email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// User document handed to the store, which assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
}

impl NewUser {
    /// Materialise the stored record once the store has picked an id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.email, self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn user_id_displays_as_hyphenated_uuid() {
        let raw = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let id = UserId::from_uuid(Uuid::parse_str(raw).expect("valid uuid"));
        assert_eq!(id.to_string(), raw);
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("\t\n", true)]
    #[case(" a@x.com ", false)]
    fn email_reports_blank_values(#[case] raw: &str, #[case] blank: bool) {
        let email = Email::new(raw);
        assert_eq!(email.is_blank(), blank);
        assert_eq!(email.as_ref(), raw);
    }

    #[rstest]
    fn email_preserves_case() {
        let email = Email::new("Alice@Example.COM");
        assert_eq!(email.as_ref(), "Alice@Example.COM");
        assert_ne!(email, Email::new("alice@example.com"));
    }

    #[rstest]
    fn password_hash_rejects_empty_digest() {
        assert_eq!(
            PasswordHash::new("").expect_err("empty digest"),
            UserValidationError::EmptyPasswordHash
        );
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$2b$10$secret").expect("digest");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }

    #[rstest]
    fn new_user_keeps_fields_when_materialised() {
        let id = UserId::random();
        let new_user = NewUser {
            email: Email::new("a@x.com"),
            password_hash: PasswordHash::new("digest").expect("digest"),
        };
        let user = new_user.into_user(id.clone());
        assert_eq!(user.id(), &id);
        assert_eq!(user.email().as_ref(), "a@x.com");
        assert_eq!(user.password_hash().as_ref(), "digest");
    }
}
