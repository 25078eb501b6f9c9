use crate::modules::catalog::domain::{Genre, Movie, MovieFilter, MovieId};
use crate::shared::application::MoviePage;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Port to the remote movie catalog.
///
/// Every method reports failures; whether a failure degrades to an empty
/// result is decided one layer up by `CatalogService`.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Movies trending this week (summary fields only)
    async fn trending(&self) -> AppResult<Vec<Movie>>;

    /// Free-text title search, one upstream page at a time
    async fn search(&self, query: &str, page: u32) -> AppResult<MoviePage<Movie>>;

    /// Criteria discovery sorted by descending popularity
    async fn discover(&self, filter: &MovieFilter, page: u32) -> AppResult<MoviePage<Movie>>;

    /// Full record with cast and trailers; `None` when the catalog has no such id
    async fn movie(&self, id: MovieId) -> AppResult<Option<Movie>>;

    /// Genre list for filter pickers
    async fn genres(&self) -> AppResult<Vec<Genre>>;
}
