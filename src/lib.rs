//! AIFindr client - terminal frontend for the AIFindr people search service
//!
//! This library collects a natural-language query, submits it to the search
//! backend, and exposes the resulting matches and explanation through an
//! observable state machine that the bundled views render.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use self::core::{Query, SearchController, SearchState, SEARCH_FAILED_MESSAGE};
pub use models::{HealthResponse, Profile, ProfileId, SearchRequest, SearchResponse};
pub use services::{BackendError, SearchBackend, SearchClient, Theme, ThemeStore};
pub use views::{CardView, PlainView, View, EXAMPLE_QUERY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let query = Query::parse("  artists who hike  ").expect("valid query");
        assert_eq!(query.as_str(), "artists who hike");
        assert!(SearchState::default().is_idle());
    }
}
