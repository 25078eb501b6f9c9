use serde::Serialize;

use crate::modules::browse::application::slots::RequestTicket;
use crate::modules::catalog::domain::{Genre, Movie, MovieFilter, MovieId};
use crate::modules::favorites::domain::{FavoriteCollection, Preferences};
use crate::shared::errors::AppError;

/// What became of a fetch once it resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestOutcome {
    /// The response is now visible state
    Applied,
    /// A newer request for the same slot was issued; the response was dropped
    Superseded,
    /// Nothing was fetched (no more pages, or a newer search is pending)
    Skipped,
}

/// Parameters of the search whose results are on screen
#[derive(Debug, Clone)]
pub struct SearchSession {
    pub ticket: RequestTicket,
    pub query: String,
    pub filter: MovieFilter,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchState {
    /// Most recently submitted query, possibly empty
    pub query: String,
    pub filter: MovieFilter,
    pub results: Vec<Movie>,
    /// Last page appended; 0 before any search has resolved
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<AppError>,
    #[serde(skip)]
    pub session: Option<SearchSession>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DetailState {
    pub requested_id: Option<MovieId>,
    pub movie: Option<Movie>,
    pub loading: bool,
    pub error: Option<AppError>,
}

/// Everything the view layer reads
#[derive(Debug, Clone, Default, Serialize)]
pub struct BrowseState {
    pub trending: Vec<Movie>,
    pub trending_loading: bool,
    pub genres: Vec<Genre>,
    pub search: SearchState,
    pub detail: DetailState,
    pub favorites: FavoriteCollection,
    pub preferences: Preferences,
}
