use crate::models::domain::Profile;
use serde::{Deserialize, Serialize};

/// Response for the search endpoint
///
/// An absent or empty `matches` array is a valid answer, not an error;
/// the views decide how to present it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub matches: Vec<Profile>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_matches_defaults_to_empty() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"explanation": "nothing matched"}"#).unwrap();

        assert_eq!(response.explanation, "nothing matched");
        assert!(response.matches.is_empty());
    }
}
