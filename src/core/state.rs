use crate::models::{Profile, SearchResponse};

/// User-facing message shown when a search fails
///
/// HTTP-level failures and transport failures read the same to the
/// user; diagnostic detail goes to the log instead.
pub const SEARCH_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Phase of the search lifecycle
///
/// Exactly one variant is active at a time. The controller owns the
/// only writable copy; views observe clones through a watch channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    /// No search submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The backend answered with an explanation and matches.
    Success(SearchResponse),
    /// The request failed; carries the user-facing message.
    Error(String),
}

impl SearchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Explanation text, when the current state carries one.
    pub fn explanation(&self) -> Option<&str> {
        match self {
            SearchState::Success(response) => Some(response.explanation.as_str()),
            _ => None,
        }
    }

    /// Matches held by the current state; empty unless Success.
    pub fn matches(&self) -> &[Profile] {
        match self {
            SearchState::Success(response) => &response.matches,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        assert!(SearchState::default().is_idle());
    }

    #[test]
    fn test_accessors_outside_success_are_empty() {
        let state = SearchState::Error(SEARCH_FAILED_MESSAGE.to_string());
        assert!(state.explanation().is_none());
        assert!(state.matches().is_empty());
    }

    #[test]
    fn test_success_exposes_response_data() {
        let state = SearchState::Success(SearchResponse {
            explanation: "2 matches".to_string(),
            matches: vec![],
        });

        assert_eq!(state.explanation(), Some("2 matches"));
        assert!(state.matches().is_empty());
        assert!(!state.is_loading());
    }
}
