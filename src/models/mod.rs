// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ProfileId};
pub use requests::SearchRequest;
pub use responses::{HealthResponse, SearchResponse};
