pub mod image;
pub mod movie_filter;
