pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CatalogService;
pub use domain::{
    CastMember, Genre, ImageSize, Movie, MovieCatalog, MovieFilter, MovieId, ProductionCompany,
    Trailer,
};
pub use infrastructure::tmdb::TmdbAdapter;
