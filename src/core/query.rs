use std::fmt;

/// A validated search query
///
/// Always trimmed and non-empty; blank input never produces a `Query`,
/// so an empty search can never reach the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trim `input` and wrap it; returns `None` for empty or
    /// whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Query> for String {
    fn from(query: Query) -> Self {
        query.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let query = Query::parse("  artists who hike \n").unwrap();
        assert_eq!(query.as_str(), "artists who hike");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   ").is_none());
        assert!(Query::parse("\t\n").is_none());
    }

    #[test]
    fn test_display_matches_inner_text() {
        let query = Query::parse("witty painters").unwrap();
        assert_eq!(query.to_string(), "witty painters");
    }
}
