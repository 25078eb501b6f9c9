use crate::modules::catalog::domain::{Genre, Movie, MovieCatalog, MovieFilter, MovieId};
use crate::shared::application::MoviePage;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_warn};
use std::sync::Arc;

/// Applies the failure policy on top of the catalog port.
///
/// Ambient browsing lists (trending, genres) degrade to empty on any error;
/// calls made on explicit user intent (search, discover, detail) propagate.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn MovieCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn trending(&self) -> Vec<Movie> {
        match self.catalog.trending().await {
            Ok(movies) => movies,
            Err(e) => {
                log_warn!("Trending movies unavailable, showing none: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn genres(&self) -> Vec<Genre> {
        match self.catalog.genres().await {
            Ok(genres) => genres,
            Err(e) => {
                log_warn!("Genre list unavailable, showing none: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn search(&self, query: &str, page: u32) -> AppResult<MoviePage<Movie>> {
        self.catalog.search(query, page).await
    }

    pub async fn discover(&self, filter: &MovieFilter, page: u32) -> AppResult<MoviePage<Movie>> {
        self.catalog.discover(filter, page).await
    }

    /// Plain search unless a discovery criterion is set
    pub async fn find(
        &self,
        query: &str,
        filter: &MovieFilter,
        page: u32,
    ) -> AppResult<MoviePage<Movie>> {
        if filter.has_criteria() {
            let filter = if query.trim().is_empty() {
                filter.clone()
            } else {
                filter.clone().with_query(query)
            };
            log_debug!("Using discovery for '{}' with {:?}", query, filter);
            self.discover(&filter, page).await
        } else {
            self.search(query, page).await
        }
    }

    pub async fn movie(&self, id: MovieId) -> AppResult<Movie> {
        self.catalog
            .movie(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }
}
