// Core controller exports
pub mod controller;
pub mod query;
pub mod state;

pub use controller::SearchController;
pub use query::Query;
pub use state::{SearchState, SEARCH_FAILED_MESSAGE};
