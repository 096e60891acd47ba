//! Wiring of repositories into the domain services behind the schema.

use std::sync::Arc;

use hotel_api::domain::ports::{
    BookingRepository, HotelRepository, PasswordHasher, TokenIssuer, UserRepository,
};
use hotel_api::domain::{AccountService, BookingService, HotelCatalogueService};
use hotel_api::inbound::graphql::GraphqlState;
use hotel_api::outbound::memory::InMemoryStore;
use hotel_api::outbound::persistence::{
    DieselBookingRepository, DieselHotelRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Resolver state plus the catalogue handle used for startup seeding.
pub struct BuiltState {
    pub graphql: GraphqlState,
    pub hotels: Arc<dyn HotelRepository>,
}

fn wire<U, H, B>(
    users: Arc<U>,
    hotels: Arc<H>,
    bookings: Arc<B>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
) -> BuiltState
where
    U: UserRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    let booking_service = Arc::new(BookingService::new(Arc::clone(&hotels), bookings));
    let graphql = GraphqlState::new(
        Arc::new(AccountService::new(users, hasher, tokens)),
        Arc::new(HotelCatalogueService::new(Arc::clone(&hotels))),
        booking_service.clone(),
        booking_service,
    );
    BuiltState { graphql, hotels }
}

/// Build resolver state over PostgreSQL when a pool is configured, otherwise
/// over a fresh in-memory store.
pub fn build_state(config: &ServerConfig) -> BuiltState {
    let hasher = Arc::clone(&config.hasher);
    let tokens = Arc::clone(&config.tokens);
    match &config.db_pool {
        Some(pool) => wire(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselHotelRepository::new(pool.clone())),
            Arc::new(DieselBookingRepository::new(pool.clone())),
            hasher,
            tokens,
        ),
        None => {
            let store = Arc::new(InMemoryStore::new());
            wire(
                Arc::clone(&store),
                Arc::clone(&store),
                store,
                hasher,
                tokens,
            )
        }
    }
}
