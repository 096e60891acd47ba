//! PostgreSQL-backed `BookingRepository`.
//!
//! The `bookings_hotel_date_key` unique index makes the slot check atomic: of
//! two concurrent inserts for one slot, the loser fails with
//! [`BookingRepositoryError::DuplicateSlot`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingDate, Email, HotelId, NewBooking};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::{BookingRow, NewBookingRow};
use super::pool::{DbPool, PoolError};
use super::schema::bookings;

/// Diesel implementation of [`BookingRepository`].
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    BookingRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> BookingRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::UniqueViolation => BookingRepositoryError::duplicate_slot(),
        DieselFailure::Connection(message) => BookingRepositoryError::connection(message),
        DieselFailure::Query(message) => BookingRepositoryError::query(message),
    }
}

fn rows_to_bookings(rows: Vec<BookingRow>) -> Vec<Booking> {
    rows.into_iter().map(Booking::from).collect()
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn find_by_slot(
        &self,
        hotel_id: HotelId,
        booking_date: BookingDate,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = bookings::table
            .filter(bookings::hotel_id.eq(hotel_id.get()))
            .filter(bookings::booking_date.eq(booking_date.as_naive()))
            .select(BookingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Booking::from))
    }

    async fn list(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = bookings::table
            .order(bookings::seq.asc())
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows_to_bookings(rows))
    }

    async fn list_by_email(&self, email: &Email) -> Result<Vec<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = bookings::table
            .filter(bookings::email.eq(email.as_ref()))
            .order(bookings::seq.asc())
            .select(BookingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows_to_bookings(rows))
    }

    async fn insert(&self, booking: &NewBooking) -> Result<Booking, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewBookingRow::new(Uuid::new_v4(), booking);
        let stored = diesel::insert_into(bookings::table)
            .values(&row)
            .returning(BookingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Booking::from(stored))
    }
}
