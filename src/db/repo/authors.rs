//! Author operations for the repository.

use crate::domain::{Author, AuthorId};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::debug;

use super::{delete_error, Repository, StoreResult};

fn author_from_row(row: &SqliteRow) -> Result<Author, sqlx::Error> {
    Ok(Author {
        author_id: AuthorId::new(row.try_get("author_id")?),
        name: row.try_get("name")?,
    })
}

/// Insert the author unless the name is taken, then read the row back.
///
/// Takes a plain connection so `insert_entry` can run it inside its transaction.
pub(super) async fn get_or_create_author(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Author, sqlx::Error> {
    sqlx::query("INSERT INTO author (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(&mut *conn)
        .await?;

    let row = sqlx::query("SELECT author_id, name FROM author WHERE name = ?")
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

    author_from_row(&row)
}

impl Repository {
    /// Get-or-create an author by name.
    ///
    /// Calling this twice with the same name returns the same row.
    ///
    /// # Errors
    /// Returns an error if the database fails.
    pub async fn insert_author(&self, name: &str) -> StoreResult<Author> {
        let mut conn = self.pool.acquire().await?;
        let author = get_or_create_author(&mut *conn, name).await?;
        debug!("Resolved author {} -> {}", name, author.author_id);
        Ok(author)
    }

    /// All authors in id order.
    pub async fn get_all_authors(&self) -> StoreResult<Vec<Author>> {
        let rows = sqlx::query("SELECT author_id, name FROM author ORDER BY author_id ASC")
            .fetch_all(&self.pool)
            .await?;

        let authors = rows
            .iter()
            .map(author_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(authors)
    }

    pub async fn get_author_by_id(&self, author_id: AuthorId) -> StoreResult<Option<Author>> {
        let row = sqlx::query("SELECT author_id, name FROM author WHERE author_id = ?")
            .bind(author_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(author_from_row).transpose()?)
    }

    pub async fn get_author_by_name(&self, name: &str) -> StoreResult<Option<Author>> {
        let row = sqlx::query("SELECT author_id, name FROM author WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(author_from_row).transpose()?)
    }

    /// Delete an author. Unknown ids are a no-op.
    ///
    /// # Errors
    /// Returns `StillReferenced` if an entry still points at the author.
    pub async fn delete_author(&self, author_id: AuthorId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM author WHERE author_id = ?")
            .bind(author_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, "author", author_id.as_i64()))?;

        debug!(
            "Deleted author {} ({} rows)",
            author_id,
            result.rows_affected()
        );
        Ok(())
    }
}
