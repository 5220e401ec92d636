//! Topic operations for the repository.

use crate::domain::{Topic, TopicId};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::debug;

use super::{delete_error, Repository, StoreResult};

fn topic_from_row(row: &SqliteRow) -> Result<Topic, sqlx::Error> {
    Ok(Topic {
        topic_id: TopicId::new(row.try_get("topic_id")?),
        name: row.try_get("topic")?,
    })
}

/// Insert the topic unless the name is taken, then read the row back.
pub(super) async fn get_or_create_topic(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Topic, sqlx::Error> {
    sqlx::query("INSERT INTO topic (topic) VALUES (?) ON CONFLICT(topic) DO NOTHING")
        .bind(name)
        .execute(&mut *conn)
        .await?;

    let row = sqlx::query("SELECT topic_id, topic FROM topic WHERE topic = ?")
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

    topic_from_row(&row)
}

impl Repository {
    /// Get-or-create a topic by name.
    ///
    /// # Errors
    /// Returns an error if the database fails.
    pub async fn insert_topic(&self, name: &str) -> StoreResult<Topic> {
        let mut conn = self.pool.acquire().await?;
        let topic = get_or_create_topic(&mut *conn, name).await?;
        debug!("Resolved topic {} -> {}", name, topic.topic_id);
        Ok(topic)
    }

    pub async fn get_all_topics(&self) -> StoreResult<Vec<Topic>> {
        let rows = sqlx::query("SELECT topic_id, topic FROM topic ORDER BY topic_id ASC")
            .fetch_all(&self.pool)
            .await?;

        let topics = rows
            .iter()
            .map(topic_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(topics)
    }

    pub async fn get_topic_by_id(&self, topic_id: TopicId) -> StoreResult<Option<Topic>> {
        let row = sqlx::query("SELECT topic_id, topic FROM topic WHERE topic_id = ?")
            .bind(topic_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(topic_from_row).transpose()?)
    }

    pub async fn get_topic_by_name(&self, name: &str) -> StoreResult<Option<Topic>> {
        let row = sqlx::query("SELECT topic_id, topic FROM topic WHERE topic = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(topic_from_row).transpose()?)
    }

    /// Delete a topic. Unknown ids are a no-op.
    ///
    /// # Errors
    /// Returns `StillReferenced` if an entry still points at the topic.
    pub async fn delete_topic(&self, topic_id: TopicId) -> StoreResult<()> {
        sqlx::query("DELETE FROM topic WHERE topic_id = ?")
            .bind(topic_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, "topic", topic_id.as_i64()))?;

        debug!("Deleted topic {}", topic_id);
        Ok(())
    }
}
