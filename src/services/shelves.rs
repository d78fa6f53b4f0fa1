//! Shelf management service
//!
//! Any authenticated user may add books to any shelf; ownership is
//! recorded but not enforced here.

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Book, CreateShelf, PageQuery, Paginated, Shelf},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct ShelvesService {
    repository: SharedStore,
}

impl ShelvesService {
    pub fn new(repository: SharedStore) -> Self {
        Self { repository }
    }

    /// Create a shelf owned by `owner_id`
    pub async fn create_shelf(&self, owner_id: i32, name: &str) -> AppResult<Shelf> {
        let request = CreateShelf {
            user_id: owner_id,
            name: name.to_string(),
        };
        request.validate()?;

        let shelf = self
            .repository
            .create_shelf(request.user_id, &request.name)
            .await?;
        tracing::info!("Created shelf id={} for user id={}", shelf.id, owner_id);
        Ok(shelf)
    }

    pub async fn list_shelves(&self) -> AppResult<Vec<Shelf>> {
        Ok(self.repository.list_shelves().await?)
    }

    /// One page of shelves
    pub async fn list_shelves_page(&self, query: &PageQuery) -> AppResult<Paginated<Shelf>> {
        let shelves = self.repository.list_shelves().await?;
        Ok(Paginated::from_vec(shelves, query))
    }

    pub async fn get_shelf(&self, id: i32) -> AppResult<Shelf> {
        Ok(self.repository.get_shelf(id).await?)
    }

    pub async fn list_books_by_shelf(&self, shelf_id: i32) -> AppResult<Vec<Book>> {
        Ok(self.repository.list_books_by_shelf(shelf_id).await?)
    }

    /// Put a book on a shelf. Adding it twice leaves a single link.
    pub async fn add_book_to_shelf(&self, shelf_id: i32, book_id: i32) -> AppResult<()> {
        self.repository.add_book_to_shelf(shelf_id, book_id).await?;
        tracing::debug!("Book id={} on shelf id={}", book_id, shelf_id);
        Ok(())
    }
}
