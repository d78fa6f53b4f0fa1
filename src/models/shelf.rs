//! Shelf model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's shelf. The owner is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
}

/// Create shelf request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShelf {
    pub user_id: i32,
    #[validate(length(min = 1, message = "Shelf name is required"))]
    pub name: String,
}
