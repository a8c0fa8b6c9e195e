use std::sync::Arc;

use scorewatch::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use scorewatch::adapter::outbound::sqlite::SqliteObservationStore;
use tempfile::TempDir;

/// Temporary SQLite database file for integration tests.
///
/// The file lives in a private temporary directory removed on drop.
pub struct TempDb {
    dir: TempDir,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let pool = create_pool(&Self::url_in(&dir)).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        Self { dir, pool }
    }

    fn url_in(dir: &TempDir) -> String {
        dir.path().join("scorewatch.db").display().to_string()
    }

    /// Path of the database file, for configs and fresh pools.
    pub fn url(&self) -> String {
        Self::url_in(&self.dir)
    }

    pub fn store(&self) -> Arc<SqliteObservationStore> {
        Arc::new(SqliteObservationStore::new(self.pool.clone()))
    }
}
