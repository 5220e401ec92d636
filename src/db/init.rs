//! Opening the blog database.
//!
//! Every pooled connection enforces foreign keys and runs in WAL mode with
//! `synchronous = NORMAL`. Writers wait up to five seconds on a locked file.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::path::Path;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the database at `db_path`, creating the file and its directory when
/// missing, and make sure the topic, author and entry tables exist.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    let path = Path::new(db_path);
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    let created = create_tables(&pool).await?;
    tracing::info!(path = %db_path, statements = created, "Blog database open");
    Ok(pool)
}

/// Run each `CREATE ... IF NOT EXISTS` statement in `schema.sql`.
async fn create_tables(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut count = 0;
    for statement in include_str!("schema.sql")
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        sqlx::query(statement).execute(pool).await?;
        count += 1;
    }
    Ok(count)
}
