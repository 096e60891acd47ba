//! Authentication primitives: credentials, bearer tokens and the signed-in
//! account view returned by sign-up and sign-in.
//!
//! Sign-up builds [`Credentials`] through [`Credentials::try_from_parts`] so
//! that blank input is rejected before any port is called. Sign-in uses
//! [`Credentials::from_parts`]: a blank email finds no account and an empty
//! password fails verification.

use std::fmt;

use zeroize::Zeroizing;

use super::{Email, UserId};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Email/password pair.
///
/// ## Invariants
/// - Both values are kept verbatim; whitespace in the password is
///   significant.
/// - The plaintext password is wiped from memory on drop.
///
/// # Examples
/// ```
/// use hotel_api::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("a@x.com", "pw").unwrap();
/// assert_eq!(creds.email().as_ref(), "a@x.com");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Email,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials for a new account, rejecting blank input.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let credentials = Self::from_parts(email, password);
        if credentials.email.is_blank() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(credentials)
    }

    /// Wrap raw inputs as presented at sign-in.
    #[must_use]
    pub fn from_parts(email: &str, password: &str) -> Self {
        Self {
            email: Email::new(email),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Account email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Plaintext password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"..")
            .finish()
    }
}

/// Opaque signed bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap an encoded token.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Encoded token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the wrapper, returning the encoded text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Account view returned after sign-up or sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Email,
    pub token: AccessToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("a@x.com", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = Credentials::try_from_parts(email, password).expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("a@x.com", " padded ")]
    #[case("Mixed@Case.com", "correct horse battery staple")]
    fn valid_credentials_are_kept_verbatim(#[case] email: &str, #[case] password: &str) {
        let creds = Credentials::try_from_parts(email, password).expect("valid inputs");
        assert_eq!(creds.email().as_ref(), email);
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    #[case("", "")]
    #[case("   ", "pw")]
    fn sign_in_credentials_accept_blank_input(#[case] email: &str, #[case] password: &str) {
        let creds = Credentials::from_parts(email, password);
        assert_eq!(creds.email().as_ref(), email);
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn debug_output_hides_secrets() {
        let creds = Credentials::try_from_parts("a@x.com", "hunter2").expect("valid inputs");
        let token = AccessToken::new("eyJhbGciOi".to_owned());
        assert!(!format!("{creds:?}").contains("hunter2"));
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
    }
}
