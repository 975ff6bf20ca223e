use plexgate_core::AppError;
use sqlx::SqlitePool;

/// Repository over the Plex library database.
///
/// Lookups are single-row reads keyed by the media part id as it appears in
/// the URL path. Errors are returned to the caller as values; the gateway
/// decides whether they are fatal (they never are on the redirect path).
#[derive(Clone)]
pub struct PartCatalog {
    pool: SqlitePool,
}

impl PartCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve a media part id to the stored file path, if one is known.
    ///
    /// Returns `Ok(None)` both when no row matches and when the matching row
    /// has a NULL file column. The id is bound as a parameter; it arrives
    /// verbatim from the URL and must never be spliced into the query text.
    #[tracing::instrument(skip(self), fields(db.table = "media_parts", db.operation = "select"))]
    pub async fn file_for_part(&self, part_id: &str) -> Result<Option<String>, AppError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT file FROM media_parts WHERE id = ? LIMIT 1")
                .bind(part_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.and_then(|(file,)| file))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the underlying pool. Called once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
