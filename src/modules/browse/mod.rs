pub mod application;
pub mod commands;
pub mod domain;

// Re-exports for easy external access
pub use application::{slots::SlotTracker, store::MovieStore};
pub use domain::{BrowseState, DetailState, RequestOutcome, SearchState};
