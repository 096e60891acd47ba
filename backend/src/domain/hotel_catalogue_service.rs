//! Read-only hotel catalogue service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{HotelQuery, HotelRepository, HotelRepositoryError};
use crate::domain::{Error, Hotel, HotelId};

/// Catalogue service implementing [`HotelQuery`].
#[derive(Clone)]
pub struct HotelCatalogueService<H> {
    hotels: Arc<H>,
}

impl<H> HotelCatalogueService<H> {
    /// Create a new service over `hotels`.
    pub fn new(hotels: Arc<H>) -> Self {
        Self { hotels }
    }
}

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

#[async_trait]
impl<H> HotelQuery for HotelCatalogueService<H>
where
    H: HotelRepository,
{
    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error> {
        self.hotels.list().await.map_err(map_hotel_error)
    }

    async fn find_hotel(&self, hotel_id: HotelId) -> Result<Option<Hotel>, Error> {
        self.hotels.find_by_id(hotel_id).await.map_err(map_hotel_error)
    }
}
