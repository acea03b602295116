use async_trait::async_trait;
use jiff::Timestamp;
use snaplink_core::store::Result;
use snaplink_core::{LinkStatus, ShortCode, ShortLink, Store, StoreError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS short_links (
    code       TEXT PRIMARY KEY,
    target_url TEXT NOT NULL,
    clicks     INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    status     TEXT NOT NULL DEFAULT 'active'
)
"#;

/// SQLite implementation of the store contract.
///
/// Soft delete flips `status` to `'disabled'`; rows are never removed,
/// so the primary key constraint keeps every code ever issued reserved
/// and stale redirects cannot resurrect under a reused code. The click
/// counter is updated with a single `UPDATE ... RETURNING` statement,
/// which both serializes concurrent increments and doubles as the
/// existence check.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store from an existing connection pool.
    ///
    /// The schema must already exist; use [`connect`][Self::connect] to
    /// bootstrap it.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `database_url` and
    /// ensures the schema exists.
    ///
    /// WAL mode keeps readers unblocked during writes; the busy and
    /// acquire timeouts bound how long any store call can stall.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn now_unix_seconds() -> i64 {
    Timestamp::now().as_second()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

fn link_from_row(row: &SqliteRow) -> Result<ShortLink> {
    let code: String = row.try_get("code").map_err(map_sqlx_error)?;
    let target_url: String = row.try_get("target_url").map_err(map_sqlx_error)?;
    let clicks_raw: i64 = row.try_get("clicks").map_err(map_sqlx_error)?;
    let created_at_raw: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
    let status_raw: String = row.try_get("status").map_err(map_sqlx_error)?;

    let clicks = u64::try_from(clicks_raw)
        .map_err(|_| StoreError::InvalidData(format!("negative click count: {}", clicks_raw)))?;
    let created_at = Timestamp::from_second(created_at_raw).map_err(|e| {
        StoreError::InvalidData(format!(
            "invalid created_at timestamp '{}': {e}",
            created_at_raw
        ))
    })?;
    let status = LinkStatus::parse(&status_raw)?;

    Ok(ShortLink {
        code: ShortCode::new_unchecked(code),
        target_url,
        clicks,
        created_at,
        status,
    })
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_if_absent(&self, code: &ShortCode, target_url: &str) -> Result<ShortLink> {
        let created_at = now_unix_seconds();

        let result = sqlx::query(
            r#"
            INSERT INTO short_links (code, target_url, clicks, created_at, status)
            VALUES (?, ?, 0, ?, 'active')
            "#,
        )
        .bind(code.as_str())
        .bind(target_url)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(ShortLink {
                code: code.clone(),
                target_url: target_url.to_owned(),
                clicks: 0,
                created_at: Timestamp::from_second(created_at).map_err(|e| {
                    StoreError::InvalidData(format!("invalid creation timestamp: {e}"))
                })?,
                status: LinkStatus::Active,
            }),
            Err(err) if is_unique_violation(&err) => Err(StoreError::CodeTaken(code.to_string())),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        let row = sqlx::query(
            r#"
            SELECT code, target_url, clicks, created_at, status
            FROM short_links
            WHERE code = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(link_from_row).transpose()
    }

    async fn increment_clicks(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        // Single-statement increment-and-read; no read-then-write window.
        let row = sqlx::query(
            r#"
            UPDATE short_links
            SET clicks = clicks + 1
            WHERE code = ?
            RETURNING code, target_url, clicks, created_at, status
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(link_from_row).transpose()
    }

    async fn disable(&self, code: &ShortCode) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE short_links
            SET status = 'disabled'
            WHERE code = ?
            "#,
        )
        .bind(code.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
