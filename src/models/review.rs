//! Review model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lowest and highest accepted rating
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Book review. Reviews are immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

/// Create review request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateReview {
    pub user_id: i32,
    pub book_id: i32,
    #[serde(default)]
    pub text: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}
