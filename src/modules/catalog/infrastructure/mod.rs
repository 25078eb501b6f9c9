pub mod http_client;
pub mod tmdb;

pub use http_client::HttpClient;
pub use tmdb::TmdbAdapter;
