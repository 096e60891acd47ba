//! Port abstraction for the Bookings collection.
//!
//! `(hotel_id, booking_date)` is unique. Adapters enforce it atomically on
//! insert and report collisions as [`BookingRepositoryError::DuplicateSlot`],
//! so concurrent requests for one slot cannot both succeed.
use async_trait::async_trait;

use crate::domain::{Booking, BookingDate, Email, HotelId, NewBooking};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "booking repository query failed: {message}",
        /// The hotel is already booked on that date.
        DuplicateSlot => "booking slot already taken",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Fetch the booking occupying `(hotel_id, booking_date)`, if any.
    async fn find_by_slot(
        &self,
        hotel_id: HotelId,
        booking_date: BookingDate,
    ) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Every stored booking in insertion order.
    async fn list(&self) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Bookings made under `email`, in insertion order.
    async fn list_by_email(&self, email: &Email) -> Result<Vec<Booking>, BookingRepositoryError>;

    /// Persist a booking and return it with its store-assigned id.
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, BookingRepositoryError>;
}
