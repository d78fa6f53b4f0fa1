//! Review service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{CreateReview, Review},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: SharedStore,
}

impl ReviewsService {
    pub fn new(repository: SharedStore) -> Self {
        Self { repository }
    }

    /// Store a review after checking the rating is within 1..=5
    pub async fn create_review(&self, review: CreateReview) -> AppResult<Review> {
        review.validate()?;
        let created = self.repository.create_review(&review).await?;
        tracing::info!(
            "User id={} reviewed book id={} ({}/5)",
            created.user_id,
            created.book_id,
            created.rating
        );
        Ok(created)
    }

    /// Reviews of a book, newest first
    pub async fn list_reviews(&self, book_id: i32) -> AppResult<Vec<Review>> {
        Ok(self.repository.list_reviews_by_book(book_id).await?)
    }
}
