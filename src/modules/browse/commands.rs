//! View-facing commands
//!
//! Thin wrappers over [`MovieStore`] returning `Result<T, String>` so a view
//! layer can bind them directly and render failures as messages.

use super::application::store::MovieStore;
use super::domain::{BrowseState, DetailState, RequestOutcome};
use crate::modules::catalog::domain::{Genre, Movie, MovieFilter, MovieId};
use crate::modules::favorites::domain::FavoriteToggle;

use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMoviesRequest {
    pub query: String,
    #[serde(default)]
    pub filter: MovieFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMovieDetailsRequest {
    pub id: MovieId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDarkModeRequest {
    pub enabled: bool,
}

/// Search results as the view renders them after a search command
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    pub outcome: RequestOutcome,
    pub query: String,
    pub results: Vec<Movie>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteToggleResponse {
    pub id: MovieId,
    pub toggle: FavoriteToggle,
    pub is_favorite: bool,
    pub total: usize,
}

fn search_view(store: &MovieStore, outcome: RequestOutcome) -> SearchView {
    let state = store.snapshot();
    SearchView {
        outcome,
        query: state.search.query,
        results: state.search.results,
        has_more: state.search.has_more,
    }
}

pub fn get_state(store: &MovieStore) -> BrowseState {
    store.snapshot()
}

pub async fn search_movies(
    request: SearchMoviesRequest,
    store: &MovieStore,
) -> Result<SearchView, String> {
    log_debug!(
        "search_movies command called - query: '{}', filter: {:?}",
        request.query,
        request.filter
    );

    let outcome = store
        .run_search(&request.query, request.filter)
        .await
        .map_err(|e| {
            log_error!("search_movies failed: {}", e);
            e.to_string()
        })?;

    Ok(search_view(store, outcome))
}

pub async fn load_more_results(store: &MovieStore) -> Result<SearchView, String> {
    let outcome = store.load_more().await.map_err(|e| e.to_string())?;
    Ok(search_view(store, outcome))
}

pub async fn refresh_trending(store: &MovieStore) -> Result<Vec<Movie>, String> {
    store.load_trending().await;
    Ok(store.trending())
}

pub async fn get_genres(store: &MovieStore) -> Result<Vec<Genre>, String> {
    if store.genres().is_empty() {
        store.load_genres().await;
    }
    Ok(store.genres())
}

pub async fn get_movie_details(
    request: GetMovieDetailsRequest,
    store: &MovieStore,
) -> Result<DetailState, String> {
    store.load_movie(request.id).await.map_err(|e| {
        log_error!("get_movie_details failed for {}: {}", request.id, e);
        e.to_string()
    })?;
    Ok(store.detail())
}

pub fn toggle_favorite(movie: Movie, store: &MovieStore) -> Result<FavoriteToggleResponse, String> {
    let id = movie.id;
    let toggle = store.toggle_favorite(movie).map_err(|e| e.to_string())?;
    let favorites = store.favorites();

    Ok(FavoriteToggleResponse {
        id,
        toggle,
        is_favorite: favorites.contains(id),
        total: favorites.len(),
    })
}

pub fn get_favorites(store: &MovieStore) -> Vec<Movie> {
    store.favorites().movies().to_vec()
}

pub fn set_dark_mode(request: SetDarkModeRequest, store: &MovieStore) -> Result<bool, String> {
    store
        .set_dark_mode(request.enabled)
        .map_err(|e| e.to_string())?;
    Ok(store.dark_mode())
}

pub fn toggle_dark_mode(store: &MovieStore) -> Result<bool, String> {
    store.toggle_dark_mode().map_err(|e| e.to_string())
}

pub fn clear_search(store: &MovieStore) {
    store.clear_search();
}
