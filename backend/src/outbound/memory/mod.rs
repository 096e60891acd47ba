//! In-process store used when no database URL is configured.
//!
//! One mutex guards all three collections. Every check-then-insert runs under
//! a single guard, so duplicate emails and double-booked slots are rejected
//! atomically just as the PostgreSQL unique indexes reject them.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, HotelRepository, HotelRepositoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    Booking, BookingDate, BookingId, Email, Hotel, HotelId, NewBooking, NewUser, User, UserId,
};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    hotels: BTreeMap<HotelId, Hotel>,
    bookings: Vec<Booking>,
}

/// Volatile implementation of every repository port.
///
/// # Examples
/// ```
/// use hotel_api::domain::{Hotel, HotelDetails, HotelId};
/// use hotel_api::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::with_hotels([Hotel::new(HotelId::new(1), HotelDetails::default())]);
/// # let _ = store;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `hotels`; later duplicates replace earlier ones.
    #[must_use]
    pub fn with_hotels(hotels: impl IntoIterator<Item = Hotel>) -> Self {
        let state = StoreState {
            hotels: hotels
                .into_iter()
                .map(|hotel| (hotel.hotel_id, hotel))
                .collect(),
            ..StoreState::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, StoreState>> {
        self.state.lock().ok()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let state = self
            .lock()
            .ok_or_else(|| UserPersistenceError::query(POISONED))?;
        Ok(state.users.iter().find(|user| user.email() == email).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self
            .lock()
            .ok_or_else(|| UserPersistenceError::query(POISONED))?;
        if state.users.iter().any(|stored| stored.email() == &user.email) {
            return Err(UserPersistenceError::duplicate_email());
        }
        let stored = user.clone().into_user(UserId::random());
        state.users.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl HotelRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| HotelRepositoryError::query(POISONED))?;
        Ok(state.hotels.values().cloned().collect())
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> Result<Option<Hotel>, HotelRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| HotelRepositoryError::query(POISONED))?;
        Ok(state.hotels.get(&hotel_id).cloned())
    }

    async fn upsert(&self, hotel: &Hotel) -> Result<(), HotelRepositoryError> {
        let mut state = self
            .lock()
            .ok_or_else(|| HotelRepositoryError::query(POISONED))?;
        state.hotels.insert(hotel.hotel_id, hotel.clone());
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn find_by_slot(
        &self,
        hotel_id: HotelId,
        booking_date: BookingDate,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| BookingRepositoryError::query(POISONED))?;
        Ok(state
            .bookings
            .iter()
            .find(|booking| booking.hotel_id == hotel_id && booking.booking_date == booking_date)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Booking>, BookingRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| BookingRepositoryError::query(POISONED))?;
        Ok(state.bookings.clone())
    }

    async fn list_by_email(&self, email: &Email) -> Result<Vec<Booking>, BookingRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| BookingRepositoryError::query(POISONED))?;
        Ok(state
            .bookings
            .iter()
            .filter(|booking| &booking.email == email)
            .cloned()
            .collect())
    }

    async fn insert(&self, booking: &NewBooking) -> Result<Booking, BookingRepositoryError> {
        let mut state = self
            .lock()
            .ok_or_else(|| BookingRepositoryError::query(POISONED))?;
        let taken = state.bookings.iter().any(|stored| {
            stored.hotel_id == booking.hotel_id && stored.booking_date == booking.booking_date
        });
        if taken {
            return Err(BookingRepositoryError::duplicate_slot());
        }
        let stored = booking.clone().into_booking(BookingId::random());
        state.bookings.push(stored.clone());
        Ok(stored)
    }
}
