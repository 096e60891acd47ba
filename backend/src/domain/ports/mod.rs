//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`], [`TokenIssuer`]) are
//! implemented by outbound adapters. Driving ports ([`AccountCommand`],
//! [`HotelQuery`], [`BookingCommand`], [`BookingQuery`]) are implemented by
//! domain services and called by the GraphQL adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod booking_command;
mod booking_query;
mod booking_repository;
mod hotel_query;
mod hotel_repository;
mod password_hasher;
mod token_issuer;
mod user_repository;

pub use account_command::AccountCommand;
#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use booking_command::{BookHotelRequest, BookingCommand};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_query::BookingQuery;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
pub use hotel_query::HotelQuery;
#[cfg(test)]
pub use hotel_query::MockHotelQuery;
#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
pub use hotel_repository::{HotelRepository, HotelRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::{TokenIssueError, TokenIssuer};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
