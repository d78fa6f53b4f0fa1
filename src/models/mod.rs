//! Data models for the bookshelf core

pub mod author;
pub mod book;
pub mod import_report;
pub mod pagination;
pub mod review;
pub mod shelf;
pub mod user;

// Re-export commonly used types
pub use author::{Author, CreateAuthor};
pub use book::{Book, BookInput, BookRecord};
pub use import_report::ImportReport;
pub use pagination::{PageQuery, Paginated};
pub use review::{CreateReview, Review};
pub use shelf::{CreateShelf, Shelf};
pub use user::{NewUser, RegisterUser, Role, User, UserClaims};
