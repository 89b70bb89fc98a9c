use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search profiles
///
/// Sent once per submission as the JSON body of `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub query: String,
}
