//! Port bundle injected into the GraphQL schema.
//!
//! Resolvers read this from the schema data so they depend only on driving
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountCommand, BookingCommand, BookingQuery, HotelQuery};

/// Dependency bundle for GraphQL resolvers.
#[derive(Clone)]
pub struct GraphqlState {
    pub accounts: Arc<dyn AccountCommand>,
    pub hotels: Arc<dyn HotelQuery>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
}

impl GraphqlState {
    /// Bundle the port implementations.
    pub fn new(
        accounts: Arc<dyn AccountCommand>,
        hotels: Arc<dyn HotelQuery>,
        bookings: Arc<dyn BookingCommand>,
        bookings_query: Arc<dyn BookingQuery>,
    ) -> Self {
        Self {
            accounts,
            hotels,
            bookings,
            bookings_query,
        }
    }
}
