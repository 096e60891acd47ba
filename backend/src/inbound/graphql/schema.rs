//! Query and mutation roots.
//!
//! Resolvers turn raw arguments into domain values, call one driving port,
//! and convert the result. They hold no business rules. Only `signUp` rejects
//! blank arguments; elsewhere a blank email is an ordinary lookup key.
//!
//! Every result type is nullable (`User`, `[Hotel]`) because the published
//! schema declares it that way.

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};

use crate::domain::ports::BookHotelRequest;
use crate::domain::{BookingDate, Credentials, Email, HotelId};

use super::error::{booking_input_error, credentials_error, field_error};
use super::state::GraphqlState;
use super::types::{BookingObject, HotelObject, UserObject};

/// Greeting returned by the `hello` probe field.
pub const WELCOME_MESSAGE: &str = "Welcome to the GraphQL Authentication Server!";

/// Executable schema served at `/graphql`.
pub type HotelSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `state` available to every resolver.
pub fn build_schema(state: GraphqlState) -> HotelSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn nullable_list<T, U: From<T>>(items: Vec<T>) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(U::from(item))).collect())
}

/// Read-only operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object(name = "RootQueryType", rename_args = "snake_case")]
impl QueryRoot {
    /// Liveness greeting.
    async fn hello(&self) -> Option<&'static str> {
        Some(WELCOME_MESSAGE)
    }

    /// Every hotel in the catalogue.
    async fn hotels(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<HotelObject>>>> {
        let state = ctx.data::<GraphqlState>()?;
        let hotels = state.hotels.list_hotels().await.map_err(field_error)?;
        Ok(nullable_list(hotels))
    }

    /// One hotel, or null when the id is unknown.
    async fn hotel(&self, ctx: &Context<'_>, hotel_id: i32) -> Result<Option<HotelObject>> {
        let state = ctx.data::<GraphqlState>()?;
        let hotel = state
            .hotels
            .find_hotel(HotelId::new(hotel_id))
            .await
            .map_err(field_error)?;
        Ok(hotel.map(HotelObject::from))
    }

    /// Every booking in the store.
    async fn bookings(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<BookingObject>>>> {
        let state = ctx.data::<GraphqlState>()?;
        let bookings = state
            .bookings_query
            .all_bookings()
            .await
            .map_err(field_error)?;
        Ok(nullable_list(bookings))
    }

    /// Bookings made under `email`; an error when there are none.
    async fn get_booked_hotels(
        &self,
        ctx: &Context<'_>,
        email: String,
    ) -> Result<Option<Vec<Option<BookingObject>>>> {
        let state = ctx.data::<GraphqlState>()?;
        let bookings = state
            .bookings_query
            .bookings_for_email(&Email::new(email))
            .await
            .map_err(field_error)?;
        Ok(nullable_list(bookings))
    }
}

/// State-changing operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object(name = "Mutation", rename_args = "snake_case")]
impl MutationRoot {
    /// Register an account and return it with a fresh token.
    async fn sign_up(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<Option<UserObject>> {
        let state = ctx.data::<GraphqlState>()?;
        let credentials = Credentials::try_from_parts(&email, &password).map_err(credentials_error)?;
        let user = state
            .accounts
            .sign_up(&credentials)
            .await
            .map_err(field_error)?;
        Ok(Some(UserObject::from(user)))
    }

    /// Authenticate and return the account with a fresh token.
    async fn sign_in(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<Option<UserObject>> {
        let state = ctx.data::<GraphqlState>()?;
        let credentials = Credentials::from_parts(&email, &password);
        let user = state
            .accounts
            .sign_in(&credentials)
            .await
            .map_err(field_error)?;
        Ok(Some(UserObject::from(user)))
    }

    /// Reserve `hotel_id` for `booking_date` under `email`.
    async fn book_hotel(
        &self,
        ctx: &Context<'_>,
        hotel_id: i32,
        email: String,
        booking_date: String,
    ) -> Result<Option<BookingObject>> {
        let state = ctx.data::<GraphqlState>()?;
        let request = BookHotelRequest {
            hotel_id: HotelId::new(hotel_id),
            email: Email::new(email),
            booking_date: booking_date
                .parse::<BookingDate>()
                .map_err(|err| booking_input_error(&err))?,
        };
        let booking = state
            .bookings
            .book_hotel(&request)
            .await
            .map_err(field_error)?;
        Ok(Some(BookingObject::from(booking)))
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
