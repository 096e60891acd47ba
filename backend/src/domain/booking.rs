//! Hotel bookings.
//!
//! A booking pins one hotel to one calendar date for an email address and
//! carries a snapshot of the hotel's descriptive fields.
//!
//! Dates are normalised to `YYYY-MM-DD` before they are stored or compared,
//! so `2025-01-19` and `2025-01-19T08:30:00Z` address the same slot.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{Email, Hotel, HotelDetails, HotelId};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` with zero-padded fields and a four-digit year.
fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Validation errors returned by the booking constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    /// The booking date was neither an ISO date nor an RFC 3339 timestamp.
    #[error("booking date `{value}` is not an ISO-8601 date")]
    InvalidDate { value: String },
}

/// Store-assigned booking identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Wrap an identifier read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier, as a store does on insert.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Calendar date of a booking.
///
/// # Examples
/// ```
/// use hotel_api::domain::BookingDate;
///
/// let plain: BookingDate = "2025-01-19".parse().unwrap();
/// let stamped: BookingDate = "2025-01-19T08:30:00Z".parse().unwrap();
/// assert_eq!(plain, stamped);
/// assert_eq!(stamped.to_string(), "2025-01-19");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Wrap an already parsed date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying calendar date.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for BookingDate {
    type Err = BookingValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        let invalid = || BookingValidationError::InvalidDate {
            value: raw.to_owned(),
        };
        if has_iso_date_shape(value) {
            return NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(Self)
                .map_err(|_| invalid());
        }
        // chrono's RFC 3339 parser also insists on a four-digit year.
        DateTime::parse_from_rfc3339(value)
            .map(|stamp| Self(stamp.with_timezone(&Utc).date_naive()))
            .map_err(|_| invalid())
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Booking document handed to the store, which assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub hotel_id: HotelId,
    pub email: Email,
    pub booking_date: BookingDate,
    pub hotel: HotelDetails,
}

impl NewBooking {
    /// Combine the request inputs with a snapshot of `hotel`.
    #[must_use]
    pub fn for_hotel(hotel: &Hotel, email: Email, booking_date: BookingDate) -> Self {
        Self {
            hotel_id: hotel.hotel_id,
            email,
            booking_date,
            hotel: hotel.details.clone(),
        }
    }

    /// Materialise the stored record once the store has picked an id.
    #[must_use]
    pub fn into_booking(self, id: BookingId) -> Booking {
        Booking {
            id,
            hotel_id: self.hotel_id,
            email: self.email,
            booking_date: self.booking_date,
            hotel: self.hotel,
        }
    }
}

/// Persisted booking record.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub hotel_id: HotelId,
    pub email: Email,
    pub booking_date: BookingDate,
    /// Hotel details as they were when the booking was made.
    pub hotel: HotelDetails,
}
