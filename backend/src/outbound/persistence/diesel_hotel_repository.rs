//! PostgreSQL-backed `HotelRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Hotel, HotelId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error};
use super::models::HotelRow;
use super::pool::{DbPool, PoolError};
use super::schema::hotels;

/// Diesel implementation of [`HotelRepository`].
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HotelRepositoryError {
    HotelRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> HotelRepositoryError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection(message) => HotelRepositoryError::connection(message),
        DieselFailure::Query(message) => HotelRepositoryError::query(message),
        // hotels has no unique index beyond its primary key, which upsert absorbs.
        DieselFailure::UniqueViolation => HotelRepositoryError::query("duplicate hotel"),
    }
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = hotels::table
            .order(hotels::hotel_id.asc())
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_id(&self, hotel_id: HotelId) -> Result<Option<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = hotels::table
            .find(hotel_id.get())
            .select(HotelRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Hotel::from))
    }

    async fn upsert(&self, hotel: &Hotel) -> Result<(), HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = HotelRow::from(hotel);
        diesel::insert_into(hotels::table)
            .values(&row)
            .on_conflict(hotels::hotel_id)
            .do_update()
            .set((
                hotels::chain_name.eq(excluded(hotels::chain_name)),
                hotels::hotel_name.eq(excluded(hotels::hotel_name)),
                hotels::city.eq(excluded(hotels::city)),
                hotels::country.eq(excluded(hotels::country)),
                hotels::star_rating.eq(excluded(hotels::star_rating)),
                hotels::latitude.eq(excluded(hotels::latitude)),
                hotels::longitude.eq(excluded(hotels::longitude)),
                hotels::photo1.eq(excluded(hotels::photo1)),
                hotels::overview.eq(excluded(hotels::overview)),
                hotels::rates_from.eq(excluded(hotels::rates_from)),
                hotels::rates_currency.eq(excluded(hotels::rates_currency)),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
