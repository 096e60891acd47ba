//! Driving port for reading bookings.

use async_trait::async_trait;

use crate::domain::{Booking, Email, Error};

/// Domain use-case port for listing bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Every booking in the store. An empty store is an empty list.
    async fn all_bookings(&self) -> Result<Vec<Booking>, Error>;

    /// Bookings made under `email`.
    ///
    /// Zero matches is reported as `NotFound`, not as an empty list.
    async fn bookings_for_email(&self, email: &Email) -> Result<Vec<Booking>, Error>;
}
