pub mod favorite_collection;
pub mod preferences;

pub use favorite_collection::{FavoriteCollection, FavoriteToggle};
pub use preferences::Preferences;
