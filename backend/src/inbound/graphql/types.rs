//! GraphQL output objects.
//!
//! Field names are the wire contract and stay snake_case on `Hotel` and
//! `Booking`. Every field is nullable in the published schema, identifiers
//! included, so each one is an `Option` here.

use async_graphql::SimpleObject;

use crate::domain::{AuthenticatedUser, Booking, Hotel};

/// `User` as returned by `signUp` and `signIn`.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
}

impl From<AuthenticatedUser> for UserObject {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: Some(user.id.to_string()),
            email: Some(user.email.to_string()),
            token: Some(user.token.into_inner()),
        }
    }
}

/// Catalogue entry.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Hotel", rename_fields = "snake_case")]
pub struct HotelObject {
    pub hotel_id: Option<i32>,
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

impl From<Hotel> for HotelObject {
    fn from(hotel: Hotel) -> Self {
        let details = hotel.details;
        Self {
            hotel_id: Some(hotel.hotel_id.get()),
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

/// Reservation with the hotel snapshot taken when it was made.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Booking", rename_fields = "snake_case")]
pub struct BookingObject {
    pub id: Option<String>,
    pub hotel_id: Option<i32>,
    pub email: Option<String>,
    pub booking_date: Option<String>,
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

impl From<Booking> for BookingObject {
    fn from(booking: Booking) -> Self {
        let snapshot = booking.hotel;
        Self {
            id: Some(booking.id.to_string()),
            hotel_id: Some(booking.hotel_id.get()),
            email: Some(booking.email.to_string()),
            booking_date: Some(booking.booking_date.to_string()),
            chain_name: snapshot.chain_name,
            hotel_name: snapshot.hotel_name,
            city: snapshot.city,
            country: snapshot.country,
            star_rating: snapshot.star_rating,
            latitude: snapshot.latitude,
            longitude: snapshot.longitude,
            photo1: snapshot.photo1,
            overview: snapshot.overview,
            rates_from: snapshot.rates_from,
            rates_currency: snapshot.rates_currency,
        }
    }
}
