//! Business logic services

pub mod catalog;
pub mod exchange;
pub mod reviews;
pub mod shelves;
pub mod users;

use crate::{
    auth::{PasswordHasher, TokenService},
    config::AppConfig,
    error::AppResult,
    repository::SharedStore,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub shelves: shelves::ShelvesService,
    pub reviews: reviews::ReviewsService,
    pub exchange: exchange::ExchangeService,
    pub tokens: TokenService,
}

impl Services {
    /// Create all services over the given store.
    ///
    /// Fails if the token secret is missing or the hashing parameters are
    /// invalid, so a misconfigured process stops at startup.
    pub fn new(repository: SharedStore, config: &AppConfig) -> AppResult<Self> {
        let tokens = TokenService::from_config(&config.auth)?;
        let hasher = PasswordHasher::new(&config.hashing)?;

        Ok(Self {
            users: users::UsersService::new(repository.clone(), hasher, tokens.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            shelves: shelves::ShelvesService::new(repository.clone()),
            reviews: reviews::ReviewsService::new(repository.clone()),
            exchange: exchange::ExchangeService::new(repository),
            tokens,
        })
    }
}
