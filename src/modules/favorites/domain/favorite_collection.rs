use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::{Movie, MovieId};

/// Result of toggling a movie's membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// User-curated movie snapshots, at most one per movie id, in insertion order.
///
/// Serializes as a plain JSON array of movies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Movie>", into = "Vec<Movie>")]
pub struct FavoriteCollection {
    movies: Vec<Movie>,
}

impl FavoriteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the movie if present, otherwise insert the snapshot as given
    pub fn toggle(&mut self, movie: Movie) -> FavoriteToggle {
        if self.remove(movie.id) {
            FavoriteToggle::Removed
        } else {
            self.movies.push(movie);
            FavoriteToggle::Added
        }
    }

    pub fn add(&mut self, movie: Movie) -> bool {
        if !self.contains(movie.id) {
            self.movies.push(movie);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, id: MovieId) -> bool {
        let original_len = self.movies.len();
        self.movies.retain(|movie| movie.id != id);
        self.movies.len() < original_len
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn ids(&self) -> Vec<MovieId> {
        self.movies.iter().map(|movie| movie.id).collect()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl From<Vec<Movie>> for FavoriteCollection {
    /// Later duplicates of an id are dropped
    fn from(movies: Vec<Movie>) -> Self {
        let mut collection = Self::new();
        for movie in movies {
            collection.add(movie);
        }
        collection
    }
}

impl From<FavoriteCollection> for Vec<Movie> {
    fn from(collection: FavoriteCollection) -> Self {
        collection.movies
    }
}
