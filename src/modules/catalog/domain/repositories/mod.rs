pub mod movie_catalog;
