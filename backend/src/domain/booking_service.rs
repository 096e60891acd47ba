//! Booking service.
//!
//! Implements [`BookingCommand`] and [`BookingQuery`]. A slot is one hotel on
//! one calendar date; the repository guarantees at most one booking per slot
//! even when two requests race past the existence check here.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    BookHotelRequest, BookingCommand, BookingQuery, BookingRepository, BookingRepositoryError,
    HotelRepository, HotelRepositoryError,
};
use crate::domain::{Booking, Email, Error, NewBooking};

pub(crate) const HOTEL_NOT_FOUND_MESSAGE: &str = "Hotel not found";
pub(crate) const SLOT_TAKEN_MESSAGE: &str = "Booking already exists for the selected date";
pub(crate) const NO_BOOKINGS_MESSAGE: &str = "No bookings found for this email";

/// Booking service implementing the booking driving ports.
#[derive(Clone)]
pub struct BookingService<H, B> {
    hotels: Arc<H>,
    bookings: Arc<B>,
}

impl<H, B> BookingService<H, B> {
    /// Create a new service with the given repositories.
    pub fn new(hotels: Arc<H>, bookings: Arc<B>) -> Self {
        Self { hotels, bookings }
    }
}

impl<H, B> BookingService<H, B>
where
    H: HotelRepository,
    B: BookingRepository,
{
    fn map_hotel_error(error: HotelRepositoryError) -> Error {
        match error {
            HotelRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("hotel repository unavailable: {message}"))
            }
            HotelRepositoryError::Query { message } => {
                Error::internal(format!("hotel repository error: {message}"))
            }
        }
    }

    fn map_booking_error(error: BookingRepositoryError) -> Error {
        match error {
            BookingRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("booking repository unavailable: {message}"))
            }
            BookingRepositoryError::Query { message } => {
                Error::internal(format!("booking repository error: {message}"))
            }
            BookingRepositoryError::DuplicateSlot => Error::conflict(SLOT_TAKEN_MESSAGE),
        }
    }
}

#[async_trait]
impl<H, B> BookingCommand for BookingService<H, B>
where
    H: HotelRepository,
    B: BookingRepository,
{
    async fn book_hotel(&self, request: &BookHotelRequest) -> Result<Booking, Error> {
        let hotel = self
            .hotels
            .find_by_id(request.hotel_id)
            .await
            .map_err(Self::map_hotel_error)?
            .ok_or_else(|| Error::not_found(HOTEL_NOT_FOUND_MESSAGE))?;

        let taken = self
            .bookings
            .find_by_slot(request.hotel_id, request.booking_date)
            .await
            .map_err(Self::map_booking_error)?;
        if taken.is_some() {
            return Err(Error::conflict(SLOT_TAKEN_MESSAGE));
        }

        let booking = self
            .bookings
            .insert(&NewBooking::for_hotel(
                &hotel,
                request.email.clone(),
                request.booking_date,
            ))
            .await
            .map_err(Self::map_booking_error)?;
        debug!(
            booking_id = %booking.id,
            hotel_id = %booking.hotel_id,
            booking_date = %booking.booking_date,
            "booking created"
        );
        Ok(booking)
    }
}

#[async_trait]
impl<H, B> BookingQuery for BookingService<H, B>
where
    H: HotelRepository,
    B: BookingRepository,
{
    async fn all_bookings(&self) -> Result<Vec<Booking>, Error> {
        self.bookings.list().await.map_err(Self::map_booking_error)
    }

    async fn bookings_for_email(&self, email: &Email) -> Result<Vec<Booking>, Error> {
        let bookings = self
            .bookings
            .list_by_email(email)
            .await
            .map_err(Self::map_booking_error)?;
        if bookings.is_empty() {
            return Err(Error::not_found(NO_BOOKINGS_MESSAGE));
        }
        Ok(bookings)
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
