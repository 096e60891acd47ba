//! Port abstraction for the Hotels collection.
//!
//! The API only reads hotels; [`HotelRepository::upsert`] exists for the
//! out-of-band seeding path run at startup.
use async_trait::async_trait;

use crate::domain::{Hotel, HotelId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by hotel repository adapters.
    pub enum HotelRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "hotel repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "hotel repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Every stored hotel, ordered by `hotel_id`.
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Fetch a hotel by its external identifier.
    async fn find_by_id(&self, hotel_id: HotelId) -> Result<Option<Hotel>, HotelRepositoryError>;

    /// Insert or replace a hotel keyed by `hotel_id`.
    async fn upsert(&self, hotel: &Hotel) -> Result<(), HotelRepositoryError>;
}
