//! Persistence boundary
//!
//! The core never talks to a database directly. Everything it needs from
//! storage goes through [`Store`]; adapters assign ids and timestamps and
//! enforce uniqueness (user email) and idempotence (shelf/book links).

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Author, Book, BookInput, CreateAuthor, CreateReview, NewUser, Review, Role, Shelf, User,
};

/// Errors raised by store adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness constraint violated
    #[error("conflict: {0}")]
    Conflict(String),

    /// Anything else the backend reports, passed through opaquely
    #[error("store failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared handle used by all services
pub type SharedStore = Arc<dyn Store>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    // Users

    /// Insert a user. Fails with [`StoreError::Conflict`] if the email is taken.
    async fn create_user(&self, user: &NewUser) -> StoreResult<User>;
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn get_user_by_id(&self, id: i32) -> StoreResult<User>;
    async fn update_user_role(&self, user_id: i32, role: Role) -> StoreResult<()>;

    // Authors

    async fn create_author(&self, author: &CreateAuthor) -> StoreResult<Author>;

    // Books

    /// All books, newest first
    async fn list_books(&self) -> StoreResult<Vec<Book>>;
    async fn create_book(&self, book: &BookInput) -> StoreResult<Book>;
    async fn get_book(&self, id: i32) -> StoreResult<Book>;
    /// Overwrite title, description and author; id and creation time are kept.
    async fn update_book(&self, id: i32, book: &BookInput) -> StoreResult<Book>;
    async fn delete_book(&self, id: i32) -> StoreResult<()>;

    // Shelves

    async fn create_shelf(&self, user_id: i32, name: &str) -> StoreResult<Shelf>;
    async fn list_shelves(&self) -> StoreResult<Vec<Shelf>>;
    async fn get_shelf(&self, id: i32) -> StoreResult<Shelf>;
    async fn list_books_by_shelf(&self, shelf_id: i32) -> StoreResult<Vec<Book>>;
    /// Link a book to a shelf. Linking an existing pair again is a no-op.
    async fn add_book_to_shelf(&self, shelf_id: i32, book_id: i32) -> StoreResult<()>;

    // Reviews

    async fn create_review(&self, review: &CreateReview) -> StoreResult<Review>;
    async fn list_reviews_by_book(&self, book_id: i32) -> StoreResult<Vec<Review>>;
}
