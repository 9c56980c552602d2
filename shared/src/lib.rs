pub mod cache;
pub mod error;
pub mod flow;
pub mod models;
pub mod results;
pub mod selection;
pub mod validation;

pub use cache::CacheEntry;
pub use error::{ErrorCode, ErrorResponse};
pub use flow::{BallotFlow, SubmitError};
pub use models::*;
pub use selection::{resolve_selection, Selection};
pub use validation::*;

#[cfg(test)]
mod tests;
