//! GraphQL inbound adapter.
//!
//! Exposes the `RootQueryType` and `Mutation` roots over the driving ports in
//! [`GraphqlState`]. Transport wiring lives in [`crate::inbound::http`].

pub mod error;
pub mod schema;
pub mod state;
pub mod types;

pub use error::field_error;
pub use schema::{HotelSchema, MutationRoot, QueryRoot, WELCOME_MESSAGE, build_schema};
pub use state::GraphqlState;
