use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;
use crate::shared::utils::Validator;

/// Discovery criteria; every field that is set must match (AND semantics)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    #[serde(default)]
    pub genre_id: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub min_rating: Option<f32>,
    /// Free-text title narrowing applied on top of the server-side criteria
    #[serde(default)]
    pub query: Option<String>,
}

impl MovieFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre_id: u32) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }

    /// Whether any server-side criterion is set.
    ///
    /// Only these select the discovery endpoint; a bare query stays a plain search.
    pub fn has_criteria(&self) -> bool {
        self.genre_id.is_some() || self.year.is_some() || self.min_rating.is_some()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(rating) = self.min_rating {
            Validator::validate_min_rating(rating)?;
        }
        if let Some(year) = self.year {
            Validator::validate_release_year(year)?;
        }
        Ok(())
    }

    /// Case-insensitive title match against the query, if one is set
    pub fn matches_title(&self, title: &str) -> bool {
        match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                title.to_lowercase().contains(&query.to_lowercase())
            }
            _ => true,
        }
    }

    /// Query parameters understood by the discovery endpoint
    pub fn to_discover_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("sort_by".to_string(), "popularity.desc".to_string())];
        if let Some(genre_id) = self.genre_id {
            params.push(("with_genres".to_string(), genre_id.to_string()));
        }
        if let Some(year) = self.year {
            params.push(("primary_release_year".to_string(), year.to_string()));
        }
        if let Some(rating) = self.min_rating {
            params.push(("vote_average.gte".to_string(), rating.to_string()));
        }
        params
    }
}
