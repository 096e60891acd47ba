//! Resolver tests against mocked driving ports.

use std::sync::Arc;

use async_graphql::{Request, Value, Variables};
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

use super::*;
use crate::domain::ports::{
    MockAccountCommand, MockBookingCommand, MockBookingQuery, MockHotelQuery,
};
use crate::domain::{
    AccessToken, AuthenticatedUser, BookingId, Error, Hotel, HotelDetails, NewBooking, UserId,
};

#[derive(Default)]
struct Ports {
    accounts: MockAccountCommand,
    hotels: MockHotelQuery,
    bookings: MockBookingCommand,
    bookings_query: MockBookingQuery,
}

impl Ports {
    fn schema(self) -> HotelSchema {
        build_schema(GraphqlState::new(
            Arc::new(self.accounts),
            Arc::new(self.hotels),
            Arc::new(self.bookings),
            Arc::new(self.bookings_query),
        ))
    }
}

fn test_hotel() -> Hotel {
    Hotel::new(
        HotelId::new(1),
        HotelDetails {
            hotel_name: Some("Test Hotel".to_owned()),
            star_rating: Some(4.5),
            ..HotelDetails::default()
        },
    )
}

fn account(email: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::from_uuid(
            uuid::Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("user id"),
        ),
        email: Email::new(email),
        token: AccessToken::new("signed.jwt.token".to_owned()),
    }
}

async fn execute(schema: &HotelSchema, query: &str, variables: JsonValue) -> async_graphql::Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

fn first_error_code(response: &async_graphql::Response) -> Option<Value> {
    response.errors[0]
        .extensions
        .as_ref()
        .and_then(|extensions| extensions.get("code").cloned())
}

#[tokio::test]
async fn hello_returns_welcome() {
    let schema = Ports::default().schema();

    let response = schema.execute("{ hello }").await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "hello": "Welcome to the GraphQL Authentication Server!" })
    );
}

#[tokio::test]
async fn unknown_fields_fail_validation() {
    let schema = Ports::default().schema();

    let response = schema.execute("{ invalidQuery }").await;

    assert_eq!(response.errors.len(), 1);
    assert!(
        response.errors[0]
            .message
            .contains(r#"Unknown field "invalidQuery" on type "RootQueryType""#),
        "unexpected message: {}",
        response.errors[0].message
    );
}

#[tokio::test]
async fn sign_up_returns_user_with_token() {
    let mut ports = Ports::default();
    ports
        .accounts
        .expect_sign_up()
        .times(1)
        .returning(|credentials| Ok(account(credentials.email().as_ref())));
    let schema = ports.schema();

    let response = execute(
        &schema,
        "mutation($email: String!, $password: String!) { signUp(email: $email, password: $password) { id email token } }",
        json!({ "email": "a@x.com", "password": "pw" }),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "signUp": {
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "email": "a@x.com",
            "token": "signed.jwt.token",
        }})
    );
}

#[tokio::test]
async fn sign_up_conflict_surfaces_message_and_code() {
    let mut ports = Ports::default();
    ports
        .accounts
        .expect_sign_up()
        .returning(|_| Err(Error::already_exists("User already exists")));
    let schema = ports.schema();

    let response = schema
        .execute(r#"mutation { signUp(email: "a@x.com", password: "pw") { id } }"#)
        .await;

    assert_eq!(response.errors[0].message, "User already exists");
    assert_eq!(
        first_error_code(&response),
        Some(Value::from("ALREADY_EXISTS".to_owned()))
    );
}

#[rstest]
#[case(r#"mutation { signUp(email: "  ", password: "pw") { id } }"#, "Email is required")]
#[case(r#"mutation { signUp(email: "a@x.com", password: "") { id } }"#, "Password is required")]
#[tokio::test]
async fn sign_up_rejects_blank_credentials(#[case] query: &str, #[case] message: &str) {
    let mut ports = Ports::default();
    ports.accounts.expect_sign_up().never();
    let schema = ports.schema();

    let response = schema.execute(query).await;

    assert_eq!(response.errors[0].message, message);
    assert_eq!(
        first_error_code(&response),
        Some(Value::from("VALIDATION_ERROR".to_owned()))
    );
}

#[rstest]
#[case("", "pw")]
#[case("a@x.com", "")]
#[tokio::test]
async fn sign_in_passes_blank_credentials_to_the_port(#[case] email: &str, #[case] password: &str) {
    let expected = (email.to_owned(), password.to_owned());
    let mut ports = Ports::default();
    ports
        .accounts
        .expect_sign_in()
        .times(1)
        .withf(move |credentials| {
            credentials.email().as_ref() == expected.0 && credentials.password() == expected.1
        })
        .returning(|_| Err(Error::invalid_credentials("Invalid credentials")));
    let schema = ports.schema();

    let response = execute(
        &schema,
        "mutation($email: String!, $password: String!) { signIn(email: $email, password: $password) { id } }",
        json!({ "email": email, "password": password }),
    )
    .await;

    assert_eq!(response.errors[0].message, "Invalid credentials");
}

#[rstest]
#[case(Error::not_found("User not found"), "User not found")]
#[case(Error::invalid_credentials("Invalid credentials"), "Invalid credentials")]
#[tokio::test]
async fn sign_in_failures_keep_their_text(#[case] failure: Error, #[case] message: &str) {
    let mut ports = Ports::default();
    ports
        .accounts
        .expect_sign_in()
        .return_once(move |_| Err(failure));
    let schema = ports.schema();

    let response = schema
        .execute(r#"mutation { signIn(email: "a@x.com", password: "pw") { id token } }"#)
        .await;

    assert_eq!(response.errors[0].message, message);
}

#[tokio::test]
async fn hotels_use_snake_case_fields() {
    let mut ports = Ports::default();
    ports
        .hotels
        .expect_list_hotels()
        .return_once(|| Ok(vec![test_hotel()]));
    let schema = ports.schema();

    let response = schema
        .execute("{ hotels { hotel_id hotel_name star_rating rates_from } }")
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "hotels": [{
            "hotel_id": 1,
            "hotel_name": "Test Hotel",
            "star_rating": 4.5,
            "rates_from": null,
        }]})
    );
}

#[tokio::test]
async fn unknown_hotel_is_null() {
    let mut ports = Ports::default();
    ports.hotels.expect_find_hotel().return_once(|_| Ok(None));
    let schema = ports.schema();

    let response = schema.execute("{ hotel(hotel_id: 42) { hotel_name } }").await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "hotel": null })
    );
}

#[tokio::test]
async fn book_hotel_normalises_date_before_calling_port() {
    let mut ports = Ports::default();
    ports
        .bookings
        .expect_book_hotel()
        .times(1)
        .returning(|request| {
            assert_eq!(request.booking_date.to_string(), "2025-01-19");
            Ok(NewBooking::for_hotel(&test_hotel(), request.email.clone(), request.booking_date)
                .into_booking(BookingId::random()))
        });
    let schema = ports.schema();

    let response = schema
        .execute(
            r#"mutation { bookHotel(hotel_id: 1, email: "a@x.com", booking_date: "2025-01-19T08:30:00Z") { hotel_id email booking_date hotel_name } }"#,
        )
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "bookHotel": {
            "hotel_id": 1,
            "email": "a@x.com",
            "booking_date": "2025-01-19",
            "hotel_name": "Test Hotel",
        }})
    );
}

#[tokio::test]
async fn book_hotel_rejects_unparseable_date() {
    let mut ports = Ports::default();
    ports.bookings.expect_book_hotel().never();
    let schema = ports.schema();

    let response = schema
        .execute(r#"mutation { bookHotel(hotel_id: 1, email: "a@x.com", booking_date: "next tuesday") { id } }"#)
        .await;

    assert_eq!(response.errors[0].message, "Invalid booking date");
}

#[tokio::test]
async fn book_hotel_requires_every_argument() {
    let schema = Ports::default().schema();

    let response = schema
        .execute(r#"mutation { bookHotel(hotel_id: 1, email: "a@x.com") { id } }"#)
        .await;

    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn get_booked_hotels_reports_empty_result_as_error() {
    let mut ports = Ports::default();
    ports
        .bookings_query
        .expect_bookings_for_email()
        .return_once(|_| Err(Error::not_found("No bookings found for this email")));
    let schema = ports.schema();

    let response = schema
        .execute(r#"{ getBookedHotels(email: "nobody@x.com") { id } }"#)
        .await;

    assert_eq!(response.errors[0].message, "No bookings found for this email");
    assert_eq!(
        first_error_code(&response),
        Some(Value::from("NOT_FOUND".to_owned()))
    );
}

#[tokio::test]
async fn get_booked_hotels_looks_up_blank_emails() {
    let mut ports = Ports::default();
    ports
        .bookings_query
        .expect_bookings_for_email()
        .times(1)
        .withf(|email| email.as_ref() == " ")
        .return_once(|_| Err(Error::not_found("No bookings found for this email")));
    let schema = ports.schema();

    let response = schema
        .execute(r#"{ getBookedHotels(email: " ") { id } }"#)
        .await;

    assert_eq!(response.errors[0].message, "No bookings found for this email");
}

#[tokio::test]
async fn book_hotel_accepts_blank_email() {
    let mut ports = Ports::default();
    ports
        .bookings
        .expect_book_hotel()
        .times(1)
        .withf(|request| request.email.as_ref().is_empty())
        .returning(|request| {
            Ok(NewBooking::for_hotel(&test_hotel(), request.email.clone(), request.booking_date)
                .into_booking(BookingId::random()))
        });
    let schema = ports.schema();

    let response = schema
        .execute(r#"mutation { bookHotel(hotel_id: 1, email: "", booking_date: "2025-01-19") { email } }"#)
        .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "bookHotel": { "email": "" } })
    );
}

#[rstest]
#[case("hello: String")]
#[case("hotels: [Hotel]")]
#[case("hotel(hotel_id: Int!): Hotel")]
#[case("bookings: [Booking]")]
#[case("getBookedHotels(email: String!): [Booking]")]
#[case("signUp(email: String!, password: String!): User")]
#[case("signIn(email: String!, password: String!): User")]
#[case("bookHotel(hotel_id: Int!, email: String!, booking_date: String!): Booking")]
#[case("id: String")]
#[case("hotel_id: Int")]
#[case("booking_date: String")]
#[case("token: String")]
fn sdl_declares_nullable_outputs(#[case] declaration: &str) {
    let sdl = Ports::default().schema().sdl();
    assert!(
        sdl.lines().any(|line| line.trim() == declaration),
        "missing `{declaration}` in:\n{sdl}"
    );
}

#[tokio::test]
async fn bookings_lists_everything() {
    let mut ports = Ports::default();
    ports.bookings_query.expect_all_bookings().return_once(|| {
        Ok(vec![
            NewBooking::for_hotel(
                &test_hotel(),
                Email::new("a@x.com"),
                "2025-01-19".parse().expect("date"),
            )
            .into_booking(BookingId::random()),
        ])
    });
    let schema = ports.schema();

    let response = schema.execute("{ bookings { email booking_date } }").await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().expect("json"),
        json!({ "bookings": [{ "email": "a@x.com", "booking_date": "2025-01-19" }] })
    );
}

#[tokio::test]
async fn internal_failures_are_redacted() {
    let mut ports = Ports::default();
    ports
        .hotels
        .expect_list_hotels()
        .return_once(|| Err(Error::internal("hotel repository error: relation missing")));
    let schema = ports.schema();

    let response = schema.execute("{ hotels { hotel_id } }").await;

    assert_eq!(response.errors[0].message, "Internal server error");
}
