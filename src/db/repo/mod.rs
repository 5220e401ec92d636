//! Repository layer for the blog store.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by entity:
//! - `topics.rs` - Topic get-or-create, lookups and deletes
//! - `authors.rs` - Author get-or-create, lookups and deletes
//! - `entries.rs` - Entry inserts and the joined entry reads
//!
//! Lookups return `Ok(None)` for missing rows. `Err` is reserved for storage
//! faults and for deletes the store refuses.

mod authors;
mod entries;
mod topics;

use sqlx::sqlite::SqlitePool;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database failed (I/O, corruption, constraint we did not expect).
    #[error("storage fault: {0}")]
    Storage(#[from] sqlx::Error),
    /// An author or topic cannot be deleted while an entry still points at it.
    #[error("{kind} {id} is still referenced by an entry")]
    StillReferenced { kind: &'static str, id: i64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Round-trip a trivial query to check the database is reachable.
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Translate a failed delete of a referenced row into `StillReferenced`.
fn delete_error(err: sqlx::Error, kind: &'static str, id: i64) -> StoreError {
    if is_foreign_key_violation(&err) {
        tracing::warn!("Refusing to delete {} {}: still referenced", kind, id);
        StoreError::StillReferenced { kind, id }
    } else {
        StoreError::Storage(err)
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            matches!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation)
                || db_err.message().contains("FOREIGN KEY constraint failed")
        }
        _ => false,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Repository;
    use crate::db::init::init_db;
    use tempfile::TempDir;

    pub(crate) async fn setup_test_db() -> (Repository, String, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.sqlite")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        (Repository::new(pool), db_path, temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::StillReferenced {
            kind: "author",
            id: 3,
        };
        assert_eq!(err.to_string(), "author 3 is still referenced by an entry");

        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("storage fault:"));
    }

    #[test]
    fn test_non_database_errors_are_not_fk_violations() {
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
        assert!(!is_foreign_key_violation(&sqlx::Error::PoolTimedOut));
    }
}
