//! Business logic services

pub mod catalog;
pub mod reviews;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub reviews: reviews::ReviewsService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: CatalogConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone(), catalog_config),
            reviews: reviews::ReviewsService::new(repository.clone()),
            repository,
        }
    }
}
