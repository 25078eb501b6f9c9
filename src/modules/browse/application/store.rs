//! Application state container
//!
//! `MovieStore` is the single owner of browse state and the only writer to the
//! persisted store. Fetching operations tag their request with a slot ticket
//! and publish the response only while that ticket is still the latest, so a
//! slow reply to an abandoned request can never overwrite a newer one.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::slots::{Slot, SlotTracker};
use crate::modules::browse::domain::{
    BrowseState, DetailState, RequestOutcome, SearchSession, SearchState,
};
use crate::modules::catalog::domain::{Genre, Movie, MovieFilter, MovieId};
use crate::modules::catalog::CatalogService;
use crate::modules::favorites::domain::{FavoriteCollection, FavoriteToggle, Preferences};
use crate::modules::storage::{KeyValueStore, StorageKey};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_error, log_info, log_warn};

pub struct MovieStore {
    catalog: CatalogService,
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<BrowseState>,
    slots: SlotTracker,
}

impl MovieStore {
    /// Build the container, restoring favorites, preferences and the last
    /// query from the persisted store
    pub fn new(catalog: CatalogService, storage: Arc<dyn KeyValueStore>) -> Self {
        let favorites = restore_favorites(&storage);
        let preferences = Preferences {
            dark_mode: restore_dark_mode(&storage),
        };
        let last_query = restore_last_query(&storage);

        log_info!(
            "Restored {} favorites, {} mode, last query '{}'",
            favorites.len(),
            preferences.theme_name(),
            last_query
        );

        let state = BrowseState {
            favorites,
            preferences,
            search: SearchState {
                query: last_query,
                ..SearchState::default()
            },
            ..BrowseState::default()
        };

        Self {
            catalog,
            storage,
            state: RwLock::new(state),
            slots: SlotTracker::new(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BrowseState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BrowseState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // =============================================================================
    // STARTUP
    // =============================================================================

    /// Load trending and genres, then re-run the persisted search if there is one
    pub async fn bootstrap(&self) {
        let (trending, genres) = tokio::join!(self.load_trending(), self.load_genres());
        log_debug!("Bootstrap: trending {:?}, genres {:?}", trending, genres);

        let last_query = self.last_query();
        if !last_query.is_empty() {
            log_info!("Restoring last search '{}'", last_query);
            if let Err(e) = self.run_search(&last_query, MovieFilter::default()).await {
                log_warn!("Could not restore search '{}': {}", last_query, e);
            }
        }
    }

    // =============================================================================
    // AMBIENT LISTS (degrade to empty)
    // =============================================================================

    pub async fn load_trending(&self) -> RequestOutcome {
        let ticket = {
            let mut state = self.write();
            state.trending_loading = true;
            self.slots.begin(Slot::Trending)
        };

        let movies = self.catalog.trending().await;

        let mut state = self.write();
        if !self.slots.is_current(ticket) {
            log_debug!("Discarding superseded trending response");
            return RequestOutcome::Superseded;
        }
        state.trending = movies;
        state.trending_loading = false;
        RequestOutcome::Applied
    }

    pub async fn load_genres(&self) -> RequestOutcome {
        let ticket = self.slots.begin(Slot::Genres);

        let genres = self.catalog.genres().await;

        let mut state = self.write();
        if !self.slots.is_current(ticket) {
            log_debug!("Discarding superseded genre response");
            return RequestOutcome::Superseded;
        }
        state.genres = genres;
        RequestOutcome::Applied
    }

    // =============================================================================
    // SEARCH
    // =============================================================================

    /// Start a new search session.
    ///
    /// Uses discovery when any filter criterion is set, plain search otherwise.
    /// On success the result list is replaced and paging restarts at 1.
    pub async fn run_search(&self, query: &str, filter: MovieFilter) -> AppResult<RequestOutcome> {
        let query = query.trim().to_string();

        if let Err(e) = validate_search(&query, &filter) {
            let mut state = self.write();
            // A rejected search still supersedes whatever was in flight
            self.slots.begin(Slot::Search);
            self.slots.begin(Slot::SearchPage);
            state.search.loading = false;
            state.search.loading_more = false;
            state.search.has_more = false;
            state.search.session = None;
            state.search.error = Some(e.clone());
            return Err(e);
        }

        let ticket = {
            let mut state = self.write();
            let ticket = self.slots.begin(Slot::Search);
            state.search.query = query.clone();
            state.search.filter = filter.clone();
            state.search.loading = true;
            state.search.loading_more = false;
            state.search.error = None;
            ticket
        };
        self.persist_last_query(&query);

        let result = self.catalog.find(&query, &filter, 1).await;

        let mut state = self.write();
        if !self.slots.is_current(ticket) {
            log_debug!("Discarding superseded search response for '{}'", query);
            return Ok(RequestOutcome::Superseded);
        }

        let search = &mut state.search;
        search.loading = false;
        match result {
            Ok(page) => {
                log_info!(
                    "Search '{}' returned {} movies (full page: {})",
                    query,
                    page.items.len(),
                    page.has_next()
                );
                search.has_more = page.has_next();
                search.results = page.items;
                search.page = 1;
                search.session = Some(SearchSession {
                    ticket,
                    query,
                    filter,
                });
                Ok(RequestOutcome::Applied)
            }
            Err(e) => {
                log_warn!("Search '{}' failed: {}", query, e);
                search.error = Some(e.clone());
                search.has_more = false;
                search.session = None;
                Err(e)
            }
        }
    }

    /// Append the next page of the current search session.
    ///
    /// A no-op once the session has no more pages. An empty upstream page ends
    /// the session without touching the list.
    pub async fn load_more(&self) -> AppResult<RequestOutcome> {
        let (ticket, session, next_page) = {
            let mut state = self.write();
            let Some(session) = state.search.session.clone() else {
                return Err(AppError::ValidationError(
                    "There is no search to load more results for".to_string(),
                ));
            };
            if !self.slots.is_current(session.ticket) {
                log_debug!("Load more skipped: a newer search is pending");
                return Ok(RequestOutcome::Skipped);
            }
            if !state.search.has_more {
                return Ok(RequestOutcome::Skipped);
            }

            let ticket = self.slots.begin(Slot::SearchPage);
            state.search.loading_more = true;
            state.search.error = None;
            (ticket, session, state.search.page + 1)
        };

        let result = self
            .catalog
            .find(&session.query, &session.filter, next_page)
            .await;

        let mut state = self.write();
        if !self.slots.is_current(ticket) || !self.slots.is_current(session.ticket) {
            log_debug!(
                "Discarding superseded page {} for '{}'",
                next_page,
                session.query
            );
            return Ok(RequestOutcome::Superseded);
        }

        let search = &mut state.search;
        search.loading_more = false;
        match result {
            Ok(page) if page.upstream_len == 0 => {
                log_info!("Search '{}' has no page {}", session.query, next_page);
                search.has_more = false;
                Ok(RequestOutcome::Applied)
            }
            Ok(page) => {
                search.has_more = page.has_next();
                search.results.extend(page.items);
                search.page = next_page;
                log_info!(
                    "Search '{}' now shows {} movies (page {}, more: {})",
                    session.query,
                    search.results.len(),
                    next_page,
                    search.has_more
                );
                Ok(RequestOutcome::Applied)
            }
            Err(e) => {
                log_warn!("Loading page {} of '{}' failed: {}", next_page, session.query, e);
                search.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Drop the current search and forget the persisted query
    pub fn clear_search(&self) {
        {
            let mut state = self.write();
            // Invalidate anything still in flight for the old session
            self.slots.begin(Slot::Search);
            self.slots.begin(Slot::SearchPage);
            state.search = SearchState::default();
        }
        if let Err(e) = self.storage.remove(StorageKey::LastQuery.as_str()) {
            log_warn!("Failed to forget last query: {}", e);
        }
    }

    fn persist_last_query(&self, query: &str) {
        if let Err(e) = self.storage.save_text(StorageKey::LastQuery, query) {
            log_warn!("Failed to persist last query '{}': {}", query, e);
        }
    }

    // =============================================================================
    // DETAIL
    // =============================================================================

    /// Fetch the full record for the detail view.
    ///
    /// Failures land in the detail error only; favorites, trending and search
    /// state are never touched.
    pub async fn load_movie(&self, id: MovieId) -> AppResult<RequestOutcome> {
        if let Err(e) = Validator::validate_movie_id(id) {
            let mut state = self.write();
            self.slots.begin(Slot::Detail);
            state.detail = DetailState {
                requested_id: Some(id),
                error: Some(e.clone()),
                ..DetailState::default()
            };
            return Err(e);
        }

        let ticket = {
            let mut state = self.write();
            let ticket = self.slots.begin(Slot::Detail);
            let keep_movie = state
                .detail
                .movie
                .as_ref()
                .filter(|movie| movie.id == id)
                .cloned();
            state.detail = DetailState {
                requested_id: Some(id),
                movie: keep_movie,
                loading: true,
                error: None,
            };
            ticket
        };

        let result = self.catalog.movie(id).await;

        let mut state = self.write();
        if !self.slots.is_current(ticket) {
            log_debug!("Discarding superseded detail response for movie {}", id);
            return Ok(RequestOutcome::Superseded);
        }

        let detail = &mut state.detail;
        detail.loading = false;
        match result {
            Ok(movie) => {
                detail.movie = Some(movie);
                Ok(RequestOutcome::Applied)
            }
            Err(e) => {
                log_warn!("Movie {} unavailable: {}", id, e);
                detail.movie = None;
                detail.error = Some(e.clone());
                Err(e)
            }
        }
    }

    // =============================================================================
    // FAVORITES & PREFERENCES (persisted synchronously)
    // =============================================================================

    /// Add the snapshot if its id is absent, remove the entry otherwise.
    ///
    /// The store is written before returning; if that write fails the
    /// in-memory change is rolled back.
    pub fn toggle_favorite(&self, movie: Movie) -> AppResult<FavoriteToggle> {
        let mut state = self.write();
        let id = movie.id;
        let previous = state.favorites.clone();
        let toggle = state.favorites.toggle(movie);

        if let Err(e) = self.storage.save_json(StorageKey::Favorites, &state.favorites) {
            log_error!("Failed to persist favorites, reverting toggle of {}: {}", id, e);
            state.favorites = previous;
            return Err(e);
        }

        log_info!(
            "Favorite {} {:?} ({} total)",
            id,
            toggle,
            state.favorites.len()
        );
        Ok(toggle)
    }

    pub fn set_dark_mode(&self, enabled: bool) -> AppResult<()> {
        self.update_preferences(|prefs| prefs.dark_mode = enabled)
            .map(|_| ())
    }

    /// Flip dark mode and return the new value
    pub fn toggle_dark_mode(&self) -> AppResult<bool> {
        let prefs = self.update_preferences(|prefs| {
            prefs.toggle_dark_mode();
        })?;
        Ok(prefs.dark_mode)
    }

    fn update_preferences(&self, change: impl FnOnce(&mut Preferences)) -> AppResult<Preferences> {
        let mut state = self.write();
        let previous = state.preferences;
        change(&mut state.preferences);

        if let Err(e) = self
            .storage
            .save_json(StorageKey::DarkMode, &state.preferences.dark_mode)
        {
            log_error!("Failed to persist dark mode, reverting: {}", e);
            state.preferences = previous;
            return Err(e);
        }

        log_debug!("Switched to {} mode", state.preferences.theme_name());
        Ok(state.preferences)
    }

    // =============================================================================
    // READ ACCESS
    // =============================================================================

    pub fn snapshot(&self) -> BrowseState {
        self.read().clone()
    }

    pub fn favorites(&self) -> FavoriteCollection {
        self.read().favorites.clone()
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.read().favorites.contains(id)
    }

    pub fn dark_mode(&self) -> bool {
        self.read().preferences.dark_mode
    }

    pub fn trending(&self) -> Vec<Movie> {
        self.read().trending.clone()
    }

    pub fn genres(&self) -> Vec<Genre> {
        self.read().genres.clone()
    }

    pub fn results(&self) -> Vec<Movie> {
        self.read().search.results.clone()
    }

    pub fn has_more(&self) -> bool {
        self.read().search.has_more
    }

    pub fn is_searching(&self) -> bool {
        let state = self.read();
        state.search.loading || state.search.loading_more
    }

    pub fn last_query(&self) -> String {
        self.read().search.query.clone()
    }

    pub fn search_error(&self) -> Option<AppError> {
        self.read().search.error.clone()
    }

    pub fn detail(&self) -> DetailState {
        self.read().detail.clone()
    }
}

fn validate_search(query: &str, filter: &MovieFilter) -> AppResult<()> {
    if !filter.has_criteria() {
        Validator::validate_search_query(query)?;
    }
    filter.validate()
}

fn restore_favorites(storage: &Arc<dyn KeyValueStore>) -> FavoriteCollection {
    match storage.load_json::<FavoriteCollection>(StorageKey::Favorites) {
        Ok(favorites) => favorites.unwrap_or_default(),
        Err(e) => {
            log_warn!("Stored favorites unreadable, starting empty: {}", e);
            FavoriteCollection::default()
        }
    }
}

fn restore_dark_mode(storage: &Arc<dyn KeyValueStore>) -> bool {
    match storage.load_json::<bool>(StorageKey::DarkMode) {
        Ok(flag) => flag.unwrap_or(false),
        Err(e) => {
            log_warn!("Stored dark mode flag unreadable, using light mode: {}", e);
            false
        }
    }
}

fn restore_last_query(storage: &Arc<dyn KeyValueStore>) -> String {
    match storage.load_text(StorageKey::LastQuery) {
        Ok(query) => query.unwrap_or_default().trim().to_string(),
        Err(e) => {
            log_warn!("Stored last query unreadable: {}", e);
            String::new()
        }
    }
}
