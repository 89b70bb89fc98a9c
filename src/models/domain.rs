use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque profile identifier
///
/// The mock backend issues numeric ids while other deployments use
/// string ids; both deserialize verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{}", n),
            ProfileId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A candidate profile returned by the search service
///
/// Profiles are rendered in the order received; the client never
/// re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub vibe: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_accepts_numbers_and_text() {
        let numeric: ProfileId = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, ProfileId::Number(7));

        let text: ProfileId = serde_json::from_str("\"user_7\"").unwrap();
        assert_eq!(text, ProfileId::Text("user_7".to_string()));

        assert_eq!(numeric.to_string(), "7");
        assert_eq!(text.to_string(), "user_7");
    }

    #[test]
    fn test_profile_defaults_missing_fields() {
        let profile: Profile =
            serde_json::from_str(r#"{"id": 1, "name": "Ava"}"#).unwrap();

        assert_eq!(profile.name, "Ava");
        assert!(profile.bio.is_empty());
        assert!(profile.interests.is_empty());
        assert!(profile.vibe.is_empty());
    }
}
