// View exports
pub mod cards;
pub mod plain;

pub use cards::CardView;
pub use plain::PlainView;

use crate::core::SearchState;

/// Canonical example query, shown as a hint while the client is idle.
pub const EXAMPLE_QUERY: &str = "Find me artists who love hiking and talk like Tarantino";

/// A view is a pure rendering function of the search state.
///
/// Both views produce a complete replacement for whatever was shown
/// before; nothing is rendered incrementally.
pub trait View {
    fn render(&self, state: &SearchState) -> String;
}
