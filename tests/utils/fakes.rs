/// Test doubles for the catalog port and the persisted store
use async_trait::async_trait;
use mockall::mock;
use moviedeck_lib::modules::catalog::{Genre, Movie, MovieCatalog, MovieFilter, MovieId};
use moviedeck_lib::modules::storage::{KeyValueStore, MemoryStore};
use moviedeck_lib::shared::application::MoviePage;
use moviedeck_lib::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

mock! {
    pub Catalog {}

    #[async_trait]
    impl MovieCatalog for Catalog {
        async fn trending(&self) -> AppResult<Vec<Movie>>;
        async fn search(&self, query: &str, page: u32) -> AppResult<MoviePage<Movie>>;
        async fn discover(&self, filter: &MovieFilter, page: u32) -> AppResult<MoviePage<Movie>>;
        async fn movie(&self, id: MovieId) -> AppResult<Option<Movie>>;
        async fn genres(&self) -> AppResult<Vec<Genre>>;
    }
}

type Reply<T> = oneshot::Sender<AppResult<T>>;

/// Catalog whose search and detail calls block until the test releases them.
///
/// Register a gate before issuing the request; the request then waits until
/// the returned sender is used, so tests decide the order responses arrive in.
#[derive(Default)]
pub struct GatedCatalog {
    searches: Mutex<HashMap<(String, u32), oneshot::Receiver<AppResult<MoviePage<Movie>>>>>,
    details: Mutex<HashMap<MovieId, oneshot::Receiver<AppResult<Option<Movie>>>>>,
}

impl GatedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate_search(&self, query: &str, page: u32) -> Reply<MoviePage<Movie>> {
        let (tx, rx) = oneshot::channel();
        self.searches
            .lock()
            .unwrap()
            .insert((query.to_string(), page), rx);
        tx
    }

    pub fn gate_movie(&self, id: MovieId) -> Reply<Option<Movie>> {
        let (tx, rx) = oneshot::channel();
        self.details.lock().unwrap().insert(id, rx);
        tx
    }
}

#[async_trait]
impl MovieCatalog for GatedCatalog {
    async fn trending(&self) -> AppResult<Vec<Movie>> {
        Ok(Vec::new())
    }

    async fn search(&self, query: &str, page: u32) -> AppResult<MoviePage<Movie>> {
        let gate = self
            .searches
            .lock()
            .unwrap()
            .remove(&(query.to_string(), page));
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AppError::TransportError("gate dropped".to_string()))),
            None => Err(AppError::TransportError(format!(
                "no gate for '{}' page {}",
                query, page
            ))),
        }
    }

    async fn discover(&self, _filter: &MovieFilter, page: u32) -> AppResult<MoviePage<Movie>> {
        Ok(MoviePage::empty(page))
    }

    async fn movie(&self, id: MovieId) -> AppResult<Option<Movie>> {
        let gate = self.details.lock().unwrap().remove(&id);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AppError::TransportError("gate dropped".to_string()))),
            None => Err(AppError::TransportError(format!("no gate for movie {}", id))),
        }
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        Ok(Vec::new())
    }
}

/// In-memory store whose writes can be switched to fail
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::StorageError("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::StorageError("disk full".to_string()));
        }
        self.inner.remove(key)
    }
}
