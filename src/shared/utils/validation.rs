use chrono::Datelike;

use crate::shared::application::MAX_PAGE;
use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub const MAX_QUERY_LENGTH: usize = 200;
    pub const EARLIEST_RELEASE_YEAR: i32 = 1874;

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        if query.chars().count() > Self::MAX_QUERY_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Search query too long (max {} characters)",
                Self::MAX_QUERY_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_movie_id(id: u32) -> Result<(), AppError> {
        if id == 0 {
            return Err(AppError::ValidationError(
                "Movie ID must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_min_rating(rating: f32) -> Result<(), AppError> {
        if !(0.0..=10.0).contains(&rating) {
            return Err(AppError::ValidationError(
                "Minimum rating must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(year: i32) -> Result<(), AppError> {
        // Announced titles can carry release dates a few years out
        let latest = chrono::Utc::now().year() + 5;
        if year < Self::EARLIEST_RELEASE_YEAR || year > latest {
            return Err(AppError::ValidationError(format!(
                "Release year must be between {} and {}",
                Self::EARLIEST_RELEASE_YEAR,
                latest
            )));
        }
        Ok(())
    }

    pub fn validate_page(page: u32) -> Result<(), AppError> {
        if page == 0 || page > MAX_PAGE {
            return Err(AppError::ValidationError(format!(
                "Page must be between 1 and {}",
                MAX_PAGE
            )));
        }
        Ok(())
    }
}
