use std::sync::Arc;
use tokio::sync::Mutex;
use crate::books::factory::create_book_repository;
use crate::catalog::domain::{CatalogService, SharedCatalog};
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    create_catalog_service_with_publisher(config, create_publisher())
}

// the caller keeps its own handle on the publisher, e.g. a cloned MemoryPublisher
pub fn create_catalog_service_with_publisher(config: &Configuration,
                                             publisher: Box<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, create_book_repository(), publisher))
}

pub fn create_shared_catalog(config: &Configuration) -> SharedCatalog {
    Arc::new(Mutex::new(create_catalog_service(config)))
}

pub fn create_shared_catalog_with_publisher(config: &Configuration,
                                            publisher: Box<dyn EventPublisher>) -> SharedCatalog {
    Arc::new(Mutex::new(create_catalog_service_with_publisher(config, publisher)))
}
