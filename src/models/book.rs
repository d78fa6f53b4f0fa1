//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Book as stored. Field order is the export order for JSON and CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub author_id: i32,
    /// Assigned by the store at insert, never changed afterwards
    pub created_at: DateTime<Utc>,
}

/// Writable book fields, used for create and update
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct BookInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author_id: i32,
}

impl BookInput {
    pub fn new(title: impl Into<String>, description: Option<String>, author_id: i32) -> Self {
        Self {
            title: title.into(),
            description,
            author_id,
        }
    }
}

/// Record accepted by the JSON import. `id` and `created_at` may be present
/// in exported documents and are ignored. An empty description means none.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author_id: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<BookRecord> for BookInput {
    fn from(record: BookRecord) -> Self {
        BookInput {
            title: record.title,
            description: record.description.filter(|d| !d.is_empty()),
            author_id: record.author_id,
        }
    }
}
