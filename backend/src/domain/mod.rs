//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed domain entities used by the GraphQL and
//! persistence layers, and the services that implement the driving ports.
//! Types validate on construction so adapters cannot smuggle blank emails or
//! malformed dates past the boundary.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure envelope.
//! - User, Email, PasswordHash: account records.
//! - Credentials, AccessToken, AuthenticatedUser: sign-up and sign-in values.
//! - Hotel, HotelDetails, HotelId: catalogue records.
//! - Booking, BookingDate, NewBooking: reservation records.
//! - AccountService, HotelCatalogueService, BookingService: port
//!   implementations wired by the server.

pub mod auth;
pub mod booking;
pub mod error;
pub mod hotel;
pub mod ports;
pub mod trace_id;
pub mod user;

mod account_service;
mod booking_service;
mod hotel_catalogue_service;

pub use self::account_service::AccountService;
pub use self::auth::{AccessToken, AuthenticatedUser, Credentials, CredentialsValidationError};
pub use self::booking::{
    Booking, BookingDate, BookingId, BookingValidationError, NewBooking,
};
pub use self::booking_service::BookingService;
pub use self::error::{Error, ErrorCode};
pub use self::hotel::{Hotel, HotelDetails, HotelId};
pub use self::hotel_catalogue_service::HotelCatalogueService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, NewUser, PasswordHash, User, UserId, UserValidationError};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use hotel_api::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("Hotel not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
