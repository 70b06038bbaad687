//! Slide operations. Slides live inside their parent presentation, so
//! every operation is the same pipeline: validate input, load the parent
//! (fail if absent), apply the change against that snapshot, write the
//! whole document back.

use sqlx::PgPool;
use sqlx::types::Json;

use crate::errors::AppError;
use crate::models::presentation::store::SELECT_PRESENTATION;
use crate::models::presentation::types::{Presentation, Slide};
use crate::validate;

#[derive(Clone)]
pub struct SlideManager {
    pool: PgPool,
}

impl SlideManager {
    pub fn new(pool: PgPool) -> Self {
        SlideManager { pool }
    }

    async fn load(&self, title: &str) -> Result<Presentation, AppError> {
        let sql = format!("{SELECT_PRESENTATION} WHERE title = $1");
        let found = sqlx::query_as::<_, Presentation>(&sql)
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;

        found.ok_or(AppError::NotFound)
    }

    /// Write the parent's mutable state back in one statement. A parent
    /// deleted between load and persist shows up as zero rows here.
    async fn persist(&self, presentation: &Presentation) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE presentations SET authors = $2, slides = $3 WHERE title = $1")
                .bind(&presentation.title)
                .bind(&presentation.authors)
                .bind(Json(&presentation.slides))
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Append a slide to the end of the parent's slide list.
    pub async fn append(
        &self,
        title: &str,
        topic: &str,
        body: &str,
    ) -> Result<Presentation, AppError> {
        validate::slide_input(topic, body)?;

        let mut presentation = self.load(title).await?;
        presentation.slides.push(Slide {
            topic: topic.to_string(),
            body: body.to_string(),
        });
        self.persist(&presentation).await?;

        Ok(presentation)
    }

    /// Replace the slide at `raw_index`. The index is checked against
    /// the slide list just loaded, not against anything the caller saw
    /// earlier.
    pub async fn replace_at(
        &self,
        title: &str,
        raw_index: &str,
        topic: &str,
        body: &str,
    ) -> Result<Presentation, AppError> {
        validate::slide_input(topic, body)?;

        let mut presentation = self.load(title).await?;
        let index = validate::slide_index(raw_index, presentation.slides.len())?;
        presentation.slides[index] = Slide {
            topic: topic.to_string(),
            body: body.to_string(),
        };
        self.persist(&presentation).await?;

        Ok(presentation)
    }

    /// Remove the slide at `raw_index`. Later slides shift left, so
    /// their indices are not stable across deletions.
    pub async fn remove_at(&self, title: &str, raw_index: &str) -> Result<Presentation, AppError> {
        let mut presentation = self.load(title).await?;
        let index = validate::slide_index(raw_index, presentation.slides.len())?;
        presentation.slides.remove(index);
        self.persist(&presentation).await?;

        Ok(presentation)
    }
}
