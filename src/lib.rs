//! Bookshelf
//!
//! A personal library server: catalog books, search the collection and
//! attach ratings and comments through a REST JSON API, with every API call
//! timed and recorded in a `logs` table. The [`client`] module holds the
//! matching HTTP client and HTML renderer.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repository and services over an open pool
    pub fn new(config: AppConfig, pool: sqlx::SqlitePool) -> Self {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, config.catalog.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
