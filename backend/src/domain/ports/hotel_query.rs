//! Driving port for catalogue reads.

use async_trait::async_trait;

use crate::domain::{Error, Hotel, HotelId};

/// Domain use-case port for reading hotels.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelQuery: Send + Sync {
    /// Every hotel, unfiltered. An empty catalogue is an empty list.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error>;

    /// One hotel, or `None` when the id is unknown.
    async fn find_hotel(&self, hotel_id: HotelId) -> Result<Option<Hotel>, Error>;
}
