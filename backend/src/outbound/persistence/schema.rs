//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Estate residents and staff accounts.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        /// Stored lower-cased; unique.
        email -> Varchar,
        /// `ADMIN`, `STAFF` or `USER`.
        role -> Varchar,
        phone -> Nullable<Varchar>,
        /// Argon2 PHC string; accounts without one cannot log in.
        password_hash -> Nullable<Varchar>,
        is_first_login -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Priced categories of house.
    house_types (id) {
        id -> Uuid,
        /// Unique display name.
        type_name -> Varchar,
        /// Monthly fee.
        price -> Float8,
        description -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Houses in the estate; unique per `(block, house_number)`.
    houses (id) {
        id -> Uuid,
        house_number -> Varchar,
        block -> Varchar,
        house_type_id -> Uuid,
        /// Owner; `NULL` means the house is available.
        user_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Monthly fee payments; unique per `(house_id, period_year, period_month)`.
    payments (id) {
        id -> Uuid,
        house_id -> Uuid,
        amount -> Float8,
        period_year -> Int4,
        period_month -> Int4,
        paid_at -> Timestamptz,
    }
}

diesel::joinable!(houses -> house_types (house_type_id));
diesel::joinable!(houses -> users (user_id));
diesel::joinable!(payments -> houses (house_id));

diesel::allow_tables_to_appear_in_same_query!(users, house_types, houses, payments);
