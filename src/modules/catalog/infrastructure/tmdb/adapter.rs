use crate::{
    modules::catalog::{
        domain::{
            value_objects::image::{build_image_url, image_url_or_placeholder},
            Genre, ImageSize, Movie, MovieCatalog, MovieFilter, MovieId,
        },
        infrastructure::{http_client::HttpClient, tmdb::mapper::TmdbMapper},
    },
    shared::{
        application::MoviePage,
        config::TmdbConfig,
        errors::{AppError, AppResult},
        utils::{LogContext, Validator},
    },
};
use async_trait::async_trait;

use super::models::*;

/// TMDB (The Movie Database) catalog adapter over the v3 REST API
pub struct TmdbAdapter {
    http_client: HttpClient,
    base_url: String,
    image_base_url: String,
    api_key: String,
    language: String,
    mapper: TmdbMapper,
}

impl TmdbAdapter {
    pub fn new(config: &TmdbConfig) -> AppResult<Self> {
        let http_client = HttpClient::new("TMDB", config.request_timeout)?;
        Self::with_client(http_client, config)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: HttpClient, config: &TmdbConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "TMDB API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            mapper: TmdbMapper::new(),
        })
    }

    /// Build URL with API key and language parameters
    pub fn build_url(&self, endpoint: &str) -> String {
        self.build_url_with_params(endpoint, &[])
    }

    /// Build URL with API key, language and additional query parameters
    pub fn build_url_with_params(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}&language={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.language)
        );
        for (key, value) in params {
            if key != "api_key" && key != "language" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }

    /// Build full image URL from file path
    pub fn build_image_url(&self, file_path: &str, size: ImageSize) -> String {
        build_image_url(&self.image_base_url, file_path, size)
    }

    /// Poster URL for a movie, or the placeholder when it has no poster
    pub fn poster_url(&self, movie: &Movie, size: ImageSize) -> String {
        image_url_or_placeholder(&self.image_base_url, movie.poster_path.as_deref(), size)
    }

    async fn fetch_page(&self, endpoint: &str, params: &[(String, String)]) -> AppResult<TmdbListResponse> {
        let url = self.build_url_with_params(endpoint, params);
        self.http_client.get(&url).await
    }

    fn to_page(&self, response: TmdbListResponse) -> MoviePage<Movie> {
        MoviePage::new(
            self.mapper.map_summaries(response.results),
            response.page,
            response.total_pages,
        )
    }
}

#[async_trait]
impl MovieCatalog for TmdbAdapter {
    async fn trending(&self) -> AppResult<Vec<Movie>> {
        log::info!("TMDB: Getting trending movies for the week");

        let response = self.fetch_page("/trending/movie/week", &[]).await?;
        let movies = self.mapper.map_summaries(response.results);

        log::info!("TMDB: Retrieved {} trending movies", movies.len());
        Ok(movies)
    }

    async fn search(&self, query: &str, page: u32) -> AppResult<MoviePage<Movie>> {
        Validator::validate_search_query(query)?;
        Validator::validate_page(page)?;

        LogContext::search_operation(query, Some(page), None);

        let params = vec![
            ("query".to_string(), query.trim().to_string()),
            ("page".to_string(), page.to_string()),
            ("include_adult".to_string(), "false".to_string()),
        ];
        let response = self.fetch_page("/search/movie", &params).await?;
        let page = self.to_page(response);

        LogContext::search_operation(query, Some(page.page), Some(page.items.len()));
        Ok(page)
    }

    async fn discover(&self, filter: &MovieFilter, page: u32) -> AppResult<MoviePage<Movie>> {
        filter.validate()?;
        Validator::validate_page(page)?;

        let mut params = filter.to_discover_params();
        params.push(("page".to_string(), page.to_string()));
        params.push(("include_adult".to_string(), "false".to_string()));

        log::info!("TMDB: Discovering movies {:?} (page {})", filter, page);

        let response = self.fetch_page("/discover/movie", &params).await?;

        // Discovery has no free-text parameter, so the query narrows the page locally
        let page = self
            .to_page(response)
            .retain(|movie| filter.matches_title(&movie.title));

        log::info!(
            "TMDB: Discovery returned {} of {} movies on page {}",
            page.items.len(),
            page.upstream_len,
            page.page
        );
        Ok(page)
    }

    async fn movie(&self, id: MovieId) -> AppResult<Option<Movie>> {
        Validator::validate_movie_id(id)?;

        let url = self.build_url_with_params(
            &format!("/movie/{}", id),
            &[("append_to_response".to_string(), "credits,videos".to_string())],
        );

        log::info!("TMDB: Getting movie details for ID '{}'", id);

        let details: MovieDetails = match self.http_client.get(&url).await {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => {
                log::info!("TMDB: No movie found for ID '{}'", id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let movie = self.mapper.map_details(details);

        log::info!(
            "TMDB: Retrieved '{}' with {} cast members and {} trailers",
            movie.title,
            movie.cast.len(),
            movie.trailers.len()
        );
        Ok(Some(movie))
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        let url = self.build_url("/genre/movie/list");

        log::info!("TMDB: Getting movie genres");

        let response: GenreListResponse = self.http_client.get(&url).await?;
        Ok(response
            .genres
            .into_iter()
            .map(|genre| self.mapper.map_genre(genre))
            .collect())
    }
}
