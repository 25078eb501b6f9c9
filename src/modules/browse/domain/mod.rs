pub mod state;

pub use state::{BrowseState, DetailState, RequestOutcome, SearchSession, SearchState};
