pub mod domain;

// Re-exports for easy external access
pub use domain::{FavoriteCollection, FavoriteToggle, Preferences};
