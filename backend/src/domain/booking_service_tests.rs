//! Tests for the booking service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockBookingRepository, MockHotelRepository};
use crate::domain::{BookingId, ErrorCode, Hotel, HotelDetails, HotelId};

type Service = BookingService<MockHotelRepository, MockBookingRepository>;

fn make_service(hotels: MockHotelRepository, bookings: MockBookingRepository) -> Service {
    BookingService::new(Arc::new(hotels), Arc::new(bookings))
}

fn test_hotel() -> Hotel {
    Hotel::new(
        HotelId::new(1),
        HotelDetails {
            hotel_name: Some("Test Hotel".to_owned()),
            city: Some("Test City".to_owned()),
            ..HotelDetails::default()
        },
    )
}

fn email(raw: &str) -> Email {
    Email::new(raw)
}

#[fixture]
fn request() -> BookHotelRequest {
    BookHotelRequest {
        hotel_id: HotelId::new(1),
        email: email("a@x.com"),
        booking_date: "2025-01-19".parse().expect("valid date"),
    }
}

fn stored(new_booking: &NewBooking) -> Booking {
    new_booking.clone().into_booking(BookingId::random())
}

#[rstest]
#[tokio::test]
async fn book_hotel_snapshots_hotel_details(request: BookHotelRequest) {
    let mut hotels = MockHotelRepository::new();
    hotels
        .expect_find_by_id()
        .with(eq(HotelId::new(1)))
        .times(1)
        .return_once(|_| Ok(Some(test_hotel())));
    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_slot()
        .times(1)
        .return_once(|_, _| Ok(None));
    bookings
        .expect_insert()
        .times(1)
        .return_once(|new_booking| Ok(stored(new_booking)));

    let booking = make_service(hotels, bookings)
        .book_hotel(&request)
        .await
        .expect("booking succeeds");

    assert_eq!(booking.hotel_id, HotelId::new(1));
    assert_eq!(booking.email.as_ref(), "a@x.com");
    assert_eq!(booking.booking_date.to_string(), "2025-01-19");
    assert_eq!(booking.hotel.hotel_name.as_deref(), Some("Test Hotel"));
    assert_eq!(booking.hotel.city.as_deref(), Some("Test City"));
}

#[rstest]
#[tokio::test]
async fn book_hotel_rejects_unknown_hotel(request: BookHotelRequest) {
    let mut hotels = MockHotelRepository::new();
    hotels.expect_find_by_id().return_once(|_| Ok(None));
    let mut bookings = MockBookingRepository::new();
    bookings.expect_insert().never();

    let err = make_service(hotels, bookings)
        .book_hotel(&request)
        .await
        .expect_err("unknown hotel");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Hotel not found");
}

#[rstest]
#[tokio::test]
async fn book_hotel_rejects_taken_slot(request: BookHotelRequest) {
    let mut hotels = MockHotelRepository::new();
    hotels
        .expect_find_by_id()
        .return_once(|_| Ok(Some(test_hotel())));
    let existing = NewBooking::for_hotel(&test_hotel(), email("b@x.com"), request.booking_date);
    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_find_by_slot()
        .with(eq(HotelId::new(1)), eq(request.booking_date))
        .return_once(move |_, _| Ok(Some(stored(&existing))));
    bookings.expect_insert().never();

    let err = make_service(hotels, bookings)
        .book_hotel(&request)
        .await
        .expect_err("slot taken");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "Booking already exists for the selected date");
}

#[rstest]
#[tokio::test]
async fn book_hotel_maps_racing_insert_to_conflict(request: BookHotelRequest) {
    let mut hotels = MockHotelRepository::new();
    hotels
        .expect_find_by_id()
        .return_once(|_| Ok(Some(test_hotel())));
    let mut bookings = MockBookingRepository::new();
    bookings.expect_find_by_slot().return_once(|_, _| Ok(None));
    bookings
        .expect_insert()
        .return_once(|_| Err(BookingRepositoryError::duplicate_slot()));

    let err = make_service(hotels, bookings)
        .book_hotel(&request)
        .await
        .expect_err("racing insert");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "Booking already exists for the selected date");
}

#[rstest]
#[case(BookingRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(BookingRepositoryError::query("deadlock"), ErrorCode::InternalError)]
#[tokio::test]
async fn all_bookings_maps_repository_failures(
    #[case] failure: BookingRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut bookings = MockBookingRepository::new();
    bookings.expect_list().return_once(move || Err(failure));

    let err = make_service(MockHotelRepository::new(), bookings)
        .all_bookings()
        .await
        .expect_err("failure surfaces");

    assert_eq!(err.code(), expected);
}

#[tokio::test]
async fn all_bookings_allows_empty_store() {
    let mut bookings = MockBookingRepository::new();
    bookings.expect_list().return_once(|| Ok(Vec::new()));

    let all = make_service(MockHotelRepository::new(), bookings)
        .all_bookings()
        .await
        .expect("list succeeds");

    assert!(all.is_empty());
}

#[tokio::test]
async fn bookings_for_email_without_matches_is_not_found() {
    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_list_by_email()
        .return_once(|_| Ok(Vec::new()));

    let err = make_service(MockHotelRepository::new(), bookings)
        .bookings_for_email(&email("nobody@x.com"))
        .await
        .expect_err("no bookings");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "No bookings found for this email");
}

#[tokio::test]
async fn bookings_for_email_returns_every_match() {
    let first = stored(&NewBooking::for_hotel(
        &test_hotel(),
        email("a@x.com"),
        "2025-01-19".parse().expect("date"),
    ));
    let second = stored(&NewBooking::for_hotel(
        &test_hotel(),
        email("a@x.com"),
        "2025-01-20".parse().expect("date"),
    ));
    let expected = vec![first.clone(), second.clone()];
    let mut bookings = MockBookingRepository::new();
    bookings
        .expect_list_by_email()
        .times(1)
        .return_once(move |_| Ok(vec![first, second]));

    let found = make_service(MockHotelRepository::new(), bookings)
        .bookings_for_email(&email("a@x.com"))
        .await
        .expect("bookings found");

    assert_eq!(found, expected);
}
