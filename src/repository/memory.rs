//! In-memory store
//!
//! Reference adapter for tests and local development. It behaves like the
//! relational store the core is written against: sequential ids starting at
//! 1 per table, unique emails, creation timestamps set on insert, books
//! listed newest first, and `ON CONFLICT DO NOTHING` shelf links.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Store, StoreError, StoreResult};
use crate::models::{
    Author, Book, BookInput, CreateAuthor, CreateReview, NewUser, Review, Role, Shelf, User,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    authors: BTreeMap<i32, Author>,
    books: BTreeMap<i32, Book>,
    shelves: BTreeMap<i32, Shelf>,
    shelf_books: BTreeSet<(i32, i32)>,
    reviews: BTreeMap<i32, Review>,
    sequences: Sequences,
}

#[derive(Default)]
struct Sequences {
    users: i32,
    authors: i32,
    books: i32,
    shelves: i32,
    reviews: i32,
}

fn next(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books, for assertions in tests
    pub async fn book_count(&self) -> usize {
        self.tables.read().await.books.len()
    }

    /// Number of shelf/book links
    pub async fn shelf_link_count(&self) -> usize {
        self.tables.read().await.shelf_books.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(format!(
                "user with email {} already exists",
                user.email
            )));
        }

        let id = next(&mut tables.sequences.users);
        let created = User {
            id,
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            name: user.name.clone(),
            role: user.role,
        };
        tables.users.insert(id, created.clone());
        Ok(created)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn get_user_by_id(&self, id: i32) -> StoreResult<User> {
        self.tables
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("User with id {}", id)))
    }

    async fn update_user_role(&self, user_id: i32, role: Role) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::NotFound(format!("User with id {}", user_id)))?;
        user.role = role;
        Ok(())
    }

    async fn create_author(&self, author: &CreateAuthor) -> StoreResult<Author> {
        let mut tables = self.tables.write().await;
        let id = next(&mut tables.sequences.authors);
        let created = Author {
            id,
            name: author.name.clone(),
        };
        tables.authors.insert(id, created.clone());
        Ok(created)
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        let tables = self.tables.read().await;
        let mut books: Vec<Book> = tables.books.values().cloned().collect();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(books)
    }

    async fn create_book(&self, book: &BookInput) -> StoreResult<Book> {
        let mut tables = self.tables.write().await;
        let id = next(&mut tables.sequences.books);
        let created = Book {
            id,
            title: book.title.clone(),
            description: book.description.clone(),
            author_id: book.author_id,
            created_at: Utc::now(),
        };
        tables.books.insert(id, created.clone());
        Ok(created)
    }

    async fn get_book(&self, id: i32) -> StoreResult<Book> {
        self.tables
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Book with id {}", id)))
    }

    async fn update_book(&self, id: i32, book: &BookInput) -> StoreResult<Book> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .books
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("Book with id {}", id)))?;
        stored.title = book.title.clone();
        stored.description = book.description.clone();
        stored.author_id = book.author_id;
        Ok(stored.clone())
    }

    async fn delete_book(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if tables.books.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("Book with id {}", id)));
        }
        tables.shelf_books.retain(|(_, book_id)| *book_id != id);
        Ok(())
    }

    async fn create_shelf(&self, user_id: i32, name: &str) -> StoreResult<Shelf> {
        let mut tables = self.tables.write().await;
        let id = next(&mut tables.sequences.shelves);
        let created = Shelf {
            id,
            user_id,
            name: name.to_string(),
        };
        tables.shelves.insert(id, created.clone());
        Ok(created)
    }

    async fn list_shelves(&self) -> StoreResult<Vec<Shelf>> {
        Ok(self.tables.read().await.shelves.values().cloned().collect())
    }

    async fn get_shelf(&self, id: i32) -> StoreResult<Shelf> {
        self.tables
            .read()
            .await
            .shelves
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Shelf with id {}", id)))
    }

    async fn list_books_by_shelf(&self, shelf_id: i32) -> StoreResult<Vec<Book>> {
        let tables = self.tables.read().await;
        let mut books: Vec<Book> = tables
            .shelf_books
            .iter()
            .filter(|(shelf, _)| *shelf == shelf_id)
            .filter_map(|(_, book_id)| tables.books.get(book_id).cloned())
            .collect();
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(books)
    }

    async fn add_book_to_shelf(&self, shelf_id: i32, book_id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.shelves.contains_key(&shelf_id) {
            return Err(StoreError::NotFound(format!("Shelf with id {}", shelf_id)));
        }
        if !tables.books.contains_key(&book_id) {
            return Err(StoreError::NotFound(format!("Book with id {}", book_id)));
        }
        tables.shelf_books.insert((shelf_id, book_id));
        Ok(())
    }

    async fn create_review(&self, review: &CreateReview) -> StoreResult<Review> {
        let mut tables = self.tables.write().await;
        let id = next(&mut tables.sequences.reviews);
        let created = Review {
            id,
            user_id: review.user_id,
            book_id: review.book_id,
            text: review.text.clone(),
            rating: review.rating,
            created_at: Utc::now(),
        };
        tables.reviews.insert(id, created.clone());
        Ok(created)
    }

    async fn list_reviews_by_book(&self, book_id: i32) -> StoreResult<Vec<Review>> {
        let tables = self.tables.read().await;
        let mut reviews: Vec<Review> = tables
            .reviews
            .values()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            name: "Alex".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let store = MemoryStore::new();
        let first = store.create_user(&new_user("a@example.com")).await.unwrap();
        assert_eq!(first.id, 1);

        let err = store.create_user(&new_user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        // Case-sensitive as stored
        assert!(store.create_user(&new_user("A@example.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_books_listed_newest_first() {
        let store = MemoryStore::new();
        for title in ["first", "second", "third"] {
            store.create_book(&BookInput::new(title, None, 1)).await.unwrap();
        }
        let titles: Vec<String> = store
            .list_books()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let store = MemoryStore::new();
        let created = store.create_book(&BookInput::new("Dune", None, 1)).await.unwrap();
        let updated = store
            .update_book(created.id, &BookInput::new("Dune Messiah", Some("sequel".to_string()), 2))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.author_id, 2);

        let missing = store.update_book(42, &BookInput::new("x", None, 1)).await;
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_shelf_links_are_idempotent() {
        let store = MemoryStore::new();
        let shelf = store.create_shelf(1, "Favourites").await.unwrap();
        let book = store.create_book(&BookInput::new("Dune", None, 1)).await.unwrap();

        store.add_book_to_shelf(shelf.id, book.id).await.unwrap();
        store.add_book_to_shelf(shelf.id, book.id).await.unwrap();
        assert_eq!(store.shelf_link_count().await, 1);
        assert_eq!(store.list_books_by_shelf(shelf.id).await.unwrap().len(), 1);

        let missing = store.add_book_to_shelf(shelf.id, 99).await;
        assert!(matches!(missing, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_book_drops_shelf_links() {
        let store = MemoryStore::new();
        let shelf = store.create_shelf(1, "Favourites").await.unwrap();
        let book = store.create_book(&BookInput::new("Dune", None, 1)).await.unwrap();
        store.add_book_to_shelf(shelf.id, book.id).await.unwrap();

        store.delete_book(book.id).await.unwrap();
        assert_eq!(store.shelf_link_count().await, 0);
        assert!(matches!(store.delete_book(book.id).await, Err(StoreError::NotFound(_))));
    }
}
