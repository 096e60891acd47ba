//! Driving port for creating bookings.

use async_trait::async_trait;

use crate::domain::{Booking, BookingDate, Email, Error, HotelId};

/// Validated `bookHotel` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookHotelRequest {
    pub hotel_id: HotelId,
    pub email: Email,
    pub booking_date: BookingDate,
}

/// Domain use-case port for booking a hotel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Book `hotel_id` for `booking_date` under `email`.
    ///
    /// Fails with `NotFound` when the hotel is unknown and `Conflict` when the
    /// slot is already taken.
    async fn book_hotel(&self, request: &BookHotelRequest) -> Result<Booking, Error>;
}
