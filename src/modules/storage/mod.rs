pub mod domain;
pub mod infrastructure;

pub use domain::{KeyValueStore, StorageKey};
pub use infrastructure::{FileStore, MemoryStore};
