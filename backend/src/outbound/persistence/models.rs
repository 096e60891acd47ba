//! Internal Diesel row structs.
//!
//! Row types never leave the persistence layer; repositories convert them to
//! domain records at the boundary.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Booking, BookingDate, BookingId, Email, Hotel, HotelDetails, HotelId, NewBooking,
    PasswordHash, User, UserId, UserValidationError,
};

use super::schema::{bookings, hotels, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    #[expect(dead_code, reason = "audit column, not surfaced through the API")]
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self::new(
            UserId::from_uuid(row.id),
            Email::new(row.email),
            PasswordHash::new(row.password_hash)?,
        ))
    }
}

/// Insertable user record; `created_at` defaults in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row read from or written to `hotels`.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub hotel_id: i32,
    pub chain_name: Option<String>,
    pub hotel_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub star_rating: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo1: Option<String>,
    pub overview: Option<String>,
    pub rates_from: Option<i32>,
    pub rates_currency: Option<String>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Self::new(
            HotelId::new(row.hotel_id),
            HotelDetails {
                chain_name: row.chain_name,
                hotel_name: row.hotel_name,
                city: row.city,
                country: row.country,
                star_rating: row.star_rating,
                latitude: row.latitude,
                longitude: row.longitude,
                photo1: row.photo1,
                overview: row.overview,
                rates_from: row.rates_from,
                rates_currency: row.rates_currency,
            },
        )
    }
}

impl From<&Hotel> for HotelRow {
    fn from(hotel: &Hotel) -> Self {
        let details = hotel.details.clone();
        Self {
            hotel_id: hotel.hotel_id.get(),
            chain_name: details.chain_name,
            hotel_name: details.hotel_name,
            city: details.city,
            country: details.country,
            star_rating: details.star_rating,
            latitude: details.latitude,
            longitude: details.longitude,
            photo1: details.photo1,
            overview: details.overview,
            rates_from: details.rates_from,
            rates_currency: details.rates_currency,
        }
    }
}

/// Row read from `bookings`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: Uuid,
    pub hotel_id: i32,
    pub email: String,
    pub booking_date: NaiveDate,
    pub chain_name: Option<String>,
    pub hotel_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub star_rating: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo1: Option<String>,
    pub overview: Option<String>,
    pub rates_from: Option<i32>,
    pub rates_currency: Option<String>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: BookingId::from_uuid(row.id),
            hotel_id: HotelId::new(row.hotel_id),
            email: Email::new(row.email),
            booking_date: BookingDate::from_naive(row.booking_date),
            hotel: HotelDetails {
                chain_name: row.chain_name,
                hotel_name: row.hotel_name,
                city: row.city,
                country: row.country,
                star_rating: row.star_rating,
                latitude: row.latitude,
                longitude: row.longitude,
                photo1: row.photo1,
                overview: row.overview,
                rates_from: row.rates_from,
                rates_currency: row.rates_currency,
            },
        }
    }
}

/// Insertable booking; `seq` and `created_at` default in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub id: Uuid,
    pub hotel_id: i32,
    pub email: &'a str,
    pub booking_date: NaiveDate,
    pub chain_name: Option<&'a str>,
    pub hotel_name: Option<&'a str>,
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub star_rating: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo1: Option<&'a str>,
    pub overview: Option<&'a str>,
    pub rates_from: Option<i32>,
    pub rates_currency: Option<&'a str>,
}

impl<'a> NewBookingRow<'a> {
    pub(crate) fn new(id: Uuid, booking: &'a NewBooking) -> Self {
        let hotel = &booking.hotel;
        Self {
            id,
            hotel_id: booking.hotel_id.get(),
            email: booking.email.as_ref(),
            booking_date: booking.booking_date.as_naive(),
            chain_name: hotel.chain_name.as_deref(),
            hotel_name: hotel.hotel_name.as_deref(),
            city: hotel.city.as_deref(),
            country: hotel.country.as_deref(),
            star_rating: hotel.star_rating,
            latitude: hotel.latitude,
            longitude: hotel.longitude,
            photo1: hotel.photo1.as_deref(),
            overview: hotel.overview.as_deref(),
            rates_from: hotel.rates_from,
            rates_currency: hotel.rates_currency.as_deref(),
        }
    }
}
