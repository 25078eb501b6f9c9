pub mod modules;
pub mod shared;
pub mod shell;

use anyhow::Context;
use modules::{
    browse::MovieStore,
    catalog::{CatalogService, MovieCatalog, TmdbAdapter},
    storage::{FileStore, KeyValueStore},
};
use shared::{utils::init_logger, AppConfig};
use std::sync::Arc;

/// Wire the application together and hand control to the console shell
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let adapter = Arc::new(
        TmdbAdapter::new(&config.tmdb).context("Failed to create the TMDB client")?,
    );
    let catalog: Arc<dyn MovieCatalog> = adapter.clone();

    let file_store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?;
    log_info!("Persisting state under {}", file_store.dir().display());
    let storage: Arc<dyn KeyValueStore> = Arc::new(file_store);

    let store = Arc::new(MovieStore::new(CatalogService::new(catalog), storage));
    store.bootstrap().await;

    shell::run(store, adapter).await
}
