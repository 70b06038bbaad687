use sqlx::PgPool;

use super::types::Presentation;
use crate::errors::AppError;
use crate::validate;

/// Columns of the caller-visible projection. The row id stays internal.
pub(crate) const SELECT_PRESENTATION: &str =
    "SELECT title, authors, created_at, slides FROM presentations";

/// Data access for presentation records. Holds the shared pool, handed
/// in once at startup.
#[derive(Clone)]
pub struct PresentationStore {
    pool: PgPool,
}

impl PresentationStore {
    pub fn new(pool: PgPool) -> Self {
        PresentationStore { pool }
    }

    /// Create a presentation with an empty slide list. Title uniqueness
    /// is enforced by the storage constraint, not by a lookup; a
    /// check-then-insert would race under concurrent callers.
    pub async fn create(&self, title: &str, authors: &[String]) -> Result<Presentation, AppError> {
        validate::presentation_input(title, authors)?;

        let created = sqlx::query_as::<_, Presentation>(
            "INSERT INTO presentations (title, authors) VALUES ($1, $2) \
             RETURNING title, authors, created_at, slides",
        )
        .bind(title)
        .bind(authors)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => AppError::DuplicateTitle,
            other => AppError::Storage(other),
        })?;

        Ok(created)
    }

    /// Fetch a single presentation by exact title.
    pub async fn get(&self, title: &str) -> Result<Presentation, AppError> {
        let sql = format!("{SELECT_PRESENTATION} WHERE title = $1");
        let found = sqlx::query_as::<_, Presentation>(&sql)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;

        found.ok_or(AppError::NotFound)
    }

    /// All presentations. Order is store-defined.
    pub async fn list(&self) -> Result<Vec<Presentation>, AppError> {
        let all = sqlx::query_as::<_, Presentation>(SELECT_PRESENTATION)
            .fetch_all(&self.pool)
            .await?;
        Ok(all)
    }

    /// Replace the author list entirely (no merge). Concurrent calls on
    /// the same title race on last-write-wins; there is no optimistic
    /// locking.
    pub async fn update_authors(
        &self,
        title: &str,
        authors: &[String],
    ) -> Result<Presentation, AppError> {
        validate::presentation_input(title, authors)?;

        let updated = sqlx::query_as::<_, Presentation>(
            "UPDATE presentations SET authors = $2 WHERE title = $1 \
             RETURNING title, authors, created_at, slides",
        )
        .bind(title)
        .bind(authors)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(AppError::NotFound)
    }

    /// Delete by title. Zero rows deleted means the presentation was
    /// already gone, which is an error, not a silent success.
    pub async fn remove(&self, title: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM presentations WHERE title = $1")
            .bind(title)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
