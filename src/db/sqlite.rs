use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};

const SELECT_VIDEOS: &str =
    "SELECT video_id, url, title, channel_title, view_count FROM videos ORDER BY rowid";

/// Raw row of the `videos` table
///
/// Mirrors the collector's schema, where everything but the id and url is nullable.
#[derive(Debug, Clone, FromRow)]
pub struct VideoRow {
    pub video_id: String,
    pub url: String,
    pub title: Option<String>,
    pub channel_title: Option<String>,
    pub view_count: Option<i64>,
}

/// Creates a pool over a private in-memory SQLite database
///
/// Every SQLite connection to `:memory:` gets its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Replays a SQL dump and reads back every row of `videos`
///
/// The database only lives for the duration of this call.
pub async fn read_videos_from_script(script: &str) -> Result<Vec<VideoRow>, sqlx::Error> {
    let pool = create_memory_pool().await?;

    sqlx::raw_sql(script).execute(&pool).await?;
    let rows = sqlx::query_as::<_, VideoRow>(SELECT_VIDEOS)
        .fetch_all(&pool)
        .await?;

    pool.close().await;
    tracing::debug!(rows = rows.len(), "Read videos from SQL dump");

    Ok(rows)
}
