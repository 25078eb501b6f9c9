/// Test helper functions and store builders
use super::fakes::MockCatalog;
use moviedeck_lib::modules::{
    browse::MovieStore,
    catalog::{CatalogService, MovieCatalog},
    storage::{KeyValueStore, MemoryStore},
};
use std::sync::Arc;

/// Build a store over any catalog and storage backend
pub fn build_store(catalog: Arc<dyn MovieCatalog>, storage: Arc<dyn KeyValueStore>) -> MovieStore {
    MovieStore::new(CatalogService::new(catalog), storage)
}

/// Store over a configured mock and a fresh in-memory backend
pub fn store_with_mock(mock: MockCatalog) -> MovieStore {
    build_store(Arc::new(mock), Arc::new(MemoryStore::new()))
}

/// Store over a mock with no expectations, for flows that must not hit the catalog
pub fn offline_store(storage: Arc<dyn KeyValueStore>) -> MovieStore {
    build_store(Arc::new(MockCatalog::new()), storage)
}
