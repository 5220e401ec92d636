//! Entry operations for the repository.
//!
//! Entries are stored with foreign keys only. Every read joins author and
//! topic back in, so an entry whose author or topic row is gone is not
//! returned by any read.

use crate::domain::{AuthorId, Entry, EntryId, TopicId};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::debug;

use super::authors::get_or_create_author;
use super::topics::get_or_create_topic;
use super::{Repository, StoreError, StoreResult};

const ENTRY_SELECT_SQL: &str = r#"
    SELECT entry.entry_id AS entry_id,
           entry.title AS title,
           entry.content AS content,
           author.name AS author,
           author.author_id AS author_id,
           topic.topic AS topic,
           topic.topic_id AS topic_id
    FROM entry
    JOIN author ON author.author_id = entry.author_id
    JOIN topic ON topic.topic_id = entry.topic_id
"#;

fn entry_from_row(row: &SqliteRow) -> Result<Entry, sqlx::Error> {
    Ok(Entry {
        entry_id: EntryId::new(row.try_get("entry_id")?),
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author: row.try_get("author")?,
        author_id: AuthorId::new(row.try_get("author_id")?),
        topic: row.try_get("topic")?,
        topic_id: TopicId::new(row.try_get("topic_id")?),
    })
}

async fn fetch_entry(
    conn: &mut SqliteConnection,
    entry_id: EntryId,
) -> Result<Option<Entry>, sqlx::Error> {
    let sql = format!("{} WHERE entry.entry_id = ?", ENTRY_SELECT_SQL);
    let row = sqlx::query(&sql)
        .bind(entry_id.as_i64())
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(entry_from_row).transpose()
}

impl Repository {
    /// Insert a new entry, creating its author and topic if needed.
    ///
    /// Author resolution, topic resolution and the entry insert share one
    /// transaction; on any failure nothing is written. Entries are never
    /// deduplicated.
    ///
    /// # Errors
    /// Returns an error if the transaction fails.
    pub async fn insert_entry(
        &self,
        title: &str,
        content: &str,
        author_name: &str,
        topic_name: &str,
    ) -> StoreResult<Entry> {
        let mut tx = self.pool.begin().await?;

        let author = get_or_create_author(&mut *tx, author_name).await?;
        let topic = get_or_create_topic(&mut *tx, topic_name).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO entry (title, content, author_id, topic_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author.author_id.as_i64())
        .bind(topic.topic_id.as_i64())
        .execute(&mut *tx)
        .await?;

        let entry_id = EntryId::new(result.last_insert_rowid());
        let entry = fetch_entry(&mut *tx, entry_id)
            .await?
            .ok_or(StoreError::Storage(sqlx::Error::RowNotFound))?;

        tx.commit().await?;

        debug!(
            "Inserted entry {} (author={}, topic={})",
            entry.entry_id, entry.author_id, entry.topic_id
        );
        Ok(entry)
    }

    /// All entries with resolvable author and topic, in id order.
    pub async fn get_all_entries(&self) -> StoreResult<Vec<Entry>> {
        let sql = format!("{} ORDER BY entry.entry_id ASC", ENTRY_SELECT_SQL);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let entries = rows
            .iter()
            .map(entry_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Look up one entry. Returns `None` if the id is unknown or the entry's
    /// author or topic no longer exists.
    pub async fn get_entry_by_id(&self, entry_id: EntryId) -> StoreResult<Option<Entry>> {
        let mut conn = self.pool.acquire().await?;
        Ok(fetch_entry(&mut *conn, entry_id).await?)
    }

    /// Delete an entry. Unknown ids are a no-op.
    pub async fn delete_entry(&self, entry_id: EntryId) -> StoreResult<()> {
        sqlx::query("DELETE FROM entry WHERE entry_id = ?")
            .bind(entry_id.as_i64())
            .execute(&self.pool)
            .await?;

        debug!("Deleted entry {}", entry_id);
        Ok(())
    }
}
