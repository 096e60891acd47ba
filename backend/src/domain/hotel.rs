//! Hotel catalogue records.
//!
//! Hotels are seeded out-of-band and only read by the API. The descriptive
//! fields are optional because seeded documents may omit any of them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Externally assigned hotel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelId(i32);

impl HotelId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for HotelId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Descriptive hotel fields.
///
/// Bookings embed a copy of this struct taken at booking time, so later
/// catalogue edits never reach existing bookings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelDetails {
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

/// Catalogue entry as stored.
///
/// # Examples
/// ```
/// use hotel_api::domain::{Hotel, HotelId};
///
/// let hotel: Hotel = serde_json::from_str(
///     r#"{"hotel_id": 1, "hotel_name": "Test Hotel", "rates_from": 100}"#,
/// ).unwrap();
/// assert_eq!(hotel.hotel_id, HotelId::new(1));
/// assert_eq!(hotel.details.hotel_name.as_deref(), Some("Test Hotel"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub hotel_id: HotelId,
    #[serde(flatten)]
    pub details: HotelDetails,
}

impl Hotel {
    /// Build a hotel from its identifier and details.
    #[must_use]
    pub const fn new(hotel_id: HotelId, details: HotelDetails) -> Self {
        Self { hotel_id, details }
    }
}
