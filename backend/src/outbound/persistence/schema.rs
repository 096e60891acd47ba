//! Diesel table definitions.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `email` carries a unique index.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Hotel catalogue, keyed by the externally assigned id.
    hotels (hotel_id) {
        hotel_id -> Int4,
        chain_name -> Nullable<Varchar>,
        hotel_name -> Nullable<Varchar>,
        city -> Nullable<Varchar>,
        country -> Nullable<Varchar>,
        star_rating -> Nullable<Float8>,
        latitude -> Nullable<Float8>,
        longitude -> Nullable<Float8>,
        photo1 -> Nullable<Text>,
        overview -> Nullable<Text>,
        rates_from -> Nullable<Int4>,
        rates_currency -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Reservations with a snapshot of the hotel at booking time.
    ///
    /// `(hotel_id, booking_date)` carries a unique index. `seq` preserves
    /// insertion order for listings.
    bookings (id) {
        id -> Uuid,
        seq -> Int8,
        hotel_id -> Int4,
        email -> Varchar,
        booking_date -> Date,
        chain_name -> Nullable<Varchar>,
        hotel_name -> Nullable<Varchar>,
        city -> Nullable<Varchar>,
        country -> Nullable<Varchar>,
        star_rating -> Nullable<Float8>,
        latitude -> Nullable<Float8>,
        longitude -> Nullable<Float8>,
        photo1 -> Nullable<Text>,
        overview -> Nullable<Text>,
        rates_from -> Nullable<Int4>,
        rates_currency -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(bookings, hotels, users);
