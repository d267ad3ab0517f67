use std::path::{Path, PathBuf};

use registrar::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use registrar::adapter::outbound::sqlite::store::SqliteRecordStore;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
///
/// The file lives in its own temporary directory, removed on drop.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("registrar-{name}.db"));

        let url = path.to_string_lossy().into_owned();
        let pool = create_pool(&url).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> SqliteRecordStore {
        SqliteRecordStore::new(self.pool.clone())
    }
}
