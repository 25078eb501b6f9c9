/// Shared application layer patterns
///
/// Abstractions used by more than one bounded context.
pub mod pagination;

pub use pagination::*;
