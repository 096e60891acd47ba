//! GraphQL mapping for domain errors.
//!
//! The domain message becomes the GraphQL error message. `extensions.code`
//! carries the stable [`ErrorCode`] and `extensions.traceId` the request
//! trace id when one was in scope. Internal errors are logged and redacted.

use async_graphql::ErrorExtensions;
use tracing::error;

use crate::domain::{
    BookingValidationError, CredentialsValidationError, Error, ErrorCode,
};

const REDACTED_MESSAGE: &str = "Internal server error";

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        let message = if self.code() == ErrorCode::InternalError {
            error!(
                detail = self.message(),
                trace_id = self.trace_id().unwrap_or_default(),
                "internal error surfaced to GraphQL"
            );
            REDACTED_MESSAGE.to_owned()
        } else {
            self.message().to_owned()
        };

        async_graphql::Error::new(message).extend_with(|_, extensions| {
            extensions.set("code", self.code().as_str().to_owned());
            if let Some(id) = self.trace_id() {
                extensions.set("traceId", id.to_owned());
            }
        })
    }
}

/// Convert a domain error into a GraphQL field error.
pub fn field_error(error: Error) -> async_graphql::Error {
    error.extend()
}

pub(crate) fn credentials_error(error: CredentialsValidationError) -> async_graphql::Error {
    let message = match error {
        CredentialsValidationError::EmptyEmail => "Email is required",
        CredentialsValidationError::EmptyPassword => "Password is required",
    };
    field_error(Error::validation(message))
}

pub(crate) fn booking_input_error(error: &BookingValidationError) -> async_graphql::Error {
    let message = match error {
        BookingValidationError::InvalidDate { .. } => "Invalid booking date",
    };
    field_error(Error::validation(message))
}
