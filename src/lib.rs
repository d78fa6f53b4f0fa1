//! Bookshelf catalog core
//!
//! Authentication, authorization and the domain rules of a small library
//! catalog: users, books, shelves, reviews and bulk import/export. Transport
//! and persistence live outside this crate; storage is reached through the
//! [`repository::Store`] trait.

use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared with whatever transport drives the core
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, store: repository::SharedStore) -> AppResult<Self> {
        let services = services::Services::new(store, &config)?;
        tracing::info!("Bookshelf core v{} ready", env!("CARGO_PKG_VERSION"));

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}
