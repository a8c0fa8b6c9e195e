//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::observations;

/// Database row for a stored observation (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = observations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ObservationRow {
    pub id: i64,
    pub scope: String,
    pub text: String,
    pub brief: String,
    pub captured_at: String,
}

/// Database row for a new observation (insertable).
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = observations)]
pub struct NewObservationRow<'a> {
    pub scope: &'a str,
    pub text: &'a str,
    pub brief: &'a str,
    pub captured_at: String,
}
