//! SQLite observation store implementation.
//!
//! Provides persistent storage for observations using SQLite and Diesel ORM.
//! Capture times are stored as fixed-width RFC 3339 UTC text so that text
//! ordering matches time ordering.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{NewObservationRow, ObservationRow};
use crate::adapter::outbound::sqlite::database::schema::observations;
use crate::domain::{Observation, ObservationHistory, ObservationKey, StoredObservation};
use crate::error::StoreError;
use crate::port::ObservationStore;

/// SQLite-backed observation store.
///
/// Implements the [`ObservationStore`] trait. Every acknowledged write has
/// been committed to the database file.
pub struct SqliteObservationStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteObservationStore {
    /// Create a new SQLite observation store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(
        &self,
    ) -> Result<
        diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>,
        StoreError,
    > {
        self.pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    fn to_row<'a>(scope: &'a str, observation: &'a Observation) -> NewObservationRow<'a> {
        NewObservationRow {
            scope,
            text: &observation.text,
            brief: &observation.brief,
            captured_at: format_timestamp(observation.captured_at),
        }
    }

    fn from_row(row: ObservationRow) -> Result<StoredObservation, StoreError> {
        let captured_at = DateTime::parse_from_rfc3339(&row.captured_at)
            .map_err(|e| StoreError::Parse(format!("captured_at of {}: {e}", row.id)))?
            .with_timezone(&Utc);

        Ok(StoredObservation {
            key: ObservationKey::new(row.id),
            observation: Observation {
                text: row.text,
                brief: row.brief,
                captured_at,
            },
        })
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[async_trait]
impl ObservationStore for SqliteObservationStore {
    async fn history(&self, scope: &str, limit: usize) -> Result<ObservationHistory, StoreError> {
        let mut conn = self.connection()?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows: Vec<ObservationRow> = observations::table
            .filter(observations::scope.eq(scope))
            .order((observations::captured_at.desc(), observations::id.desc()))
            .limit(limit)
            .select(ObservationRow::as_select())
            .load(&mut conn)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn record(
        &self,
        scope: &str,
        observation: &Observation,
        slot: Option<&ObservationKey>,
    ) -> Result<ObservationKey, StoreError> {
        let row = Self::to_row(scope, observation);
        let mut conn = self.connection()?;

        if let Some(key) = slot {
            let updated = diesel::update(
                observations::table
                    .filter(observations::id.eq(key.get()))
                    .filter(observations::scope.eq(scope)),
            )
            .set(&row)
            .execute(&mut conn)
            .map_err(|e| StoreError::Database(e.to_string()))?;

            if updated == 0 {
                return Err(StoreError::MissingSlot(key.get()));
            }
            return Ok(*key);
        }

        let id = conn
            .immediate_transaction(|conn| {
                diesel::insert_into(observations::table)
                    .values(&row)
                    .execute(conn)?;
                observations::table
                    .select(observations::id)
                    .order(observations::id.desc())
                    .first::<i64>(conn)
            })
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(ObservationKey::new(id))
    }
}
