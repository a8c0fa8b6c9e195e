//! Table definitions, maintained by hand alongside `migrations/`.
//!
//! `id` is declared `BigInt` so rowids map to `i64` keys; SQLite stores
//! both as `INTEGER`.

diesel::table! {
    observations (id) {
        id -> BigInt,
        scope -> Text,
        text -> Text,
        brief -> Text,
        captured_at -> Text,
    }
}
