//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Author, Book, BookInput, CreateAuthor},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: SharedStore,
}

impl CatalogService {
    pub fn new(repository: SharedStore) -> Self {
        Self { repository }
    }

    /// List all books, newest first. Paging is left to the caller.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.list_books().await?)
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        Ok(self.repository.get_book(id).await?)
    }

    /// Create a new book (admin only, checked by the caller)
    pub async fn create_book(&self, book: BookInput) -> AppResult<Book> {
        book.validate()?;
        let created = self.repository.create_book(&book).await?;
        tracing::info!("Created book id={}", created.id);
        Ok(created)
    }

    /// Overwrite title, description and author of an existing book
    pub async fn update_book(&self, id: i32, book: BookInput) -> AppResult<Book> {
        book.validate()?;
        let updated = self.repository.update_book(id, &book).await?;
        tracing::info!("Updated book id={}", id);
        Ok(updated)
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.delete_book(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        author.validate()?;
        Ok(self.repository.create_author(&author).await?)
    }
}
