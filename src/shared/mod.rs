// Shared kernel used by every bounded context

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers

pub use config::{AppConfig, TmdbConfig};
pub use errors::{AppError, AppResult};
