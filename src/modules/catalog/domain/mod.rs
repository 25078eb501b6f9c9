pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::movie::{CastMember, Genre, Movie, MovieId, ProductionCompany, Trailer};
pub use repositories::movie_catalog::MovieCatalog;
pub use value_objects::{image::ImageSize, movie_filter::MovieFilter};
