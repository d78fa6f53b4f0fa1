//! Integration tests driving the services the way a transport layer would

mod auth_flows;
mod catalog_flows;

use std::sync::Arc;

use bookshelf_core::{
    config::{AppConfig, AuthConfig, HashingConfig},
    repository::memory::MemoryStore,
    AppState,
};

pub const SECRET: &str = "integration-test-secret";

/// App state over a fresh in-memory store, with cheap hashing parameters
pub fn test_state() -> (AppState, Arc<MemoryStore>) {
    let config = AppConfig {
        auth: AuthConfig {
            jwt_secret: Some(SECRET.to_string()),
            token_ttl_hours: 24,
        },
        hashing: HashingConfig {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
        ..AppConfig::default()
    };

    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(config, store.clone()).expect("Failed to build app state");
    (state, store)
}
