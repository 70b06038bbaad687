use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single slide. Slides carry no identity of their own; they are
/// addressed by zero-based position within the parent presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub topic: String,
    pub body: String,
}

/// A presentation record as seen by callers. The storage row id is not
/// part of the projection; the title is the external key.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Presentation {
    pub title: String,
    pub authors: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[sqlx(json)]
    pub slides: Vec<Slide>,
}
