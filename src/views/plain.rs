use crate::core::SearchState;
use crate::views::{View, EXAMPLE_QUERY};

/// Line-oriented view
///
/// Renders every state as unstyled text, one section at a time, the
/// way the output of a pipe-friendly tool reads.
pub struct PlainView;

impl View for PlainView {
    fn render(&self, state: &SearchState) -> String {
        let mut out = String::new();

        match state {
            SearchState::Idle => {
                out.push_str("Type a query to find people, e.g.:\n");
                out.push_str("  ");
                out.push_str(EXAMPLE_QUERY);
                out.push('\n');
            }
            SearchState::Loading => {
                out.push_str("Searching...\n");
            }
            SearchState::Error(message) => {
                out.push_str(message);
                out.push('\n');
            }
            SearchState::Success(response) => {
                out.push_str(&response.explanation);
                out.push('\n');

                if response.matches.is_empty() {
                    out.push_str("No matches found.\n");
                } else {
                    for profile in &response.matches {
                        out.push('\n');
                        out.push_str(&profile.name);
                        out.push('\n');
                        if !profile.bio.is_empty() {
                            out.push_str("  ");
                            out.push_str(&profile.bio);
                            out.push('\n');
                        }
                        if !profile.interests.is_empty() {
                            out.push_str("  ");
                            let tags: Vec<String> = profile
                                .interests
                                .iter()
                                .map(|interest| format!("[{}]", interest))
                                .collect();
                            out.push_str(&tags.join(" "));
                            out.push('\n');
                        }
                        if !profile.vibe.is_empty() {
                            out.push_str("  vibe: ");
                            out.push_str(&profile.vibe);
                            out.push('\n');
                        }
                    }
                }
            }
        }

        out
    }
}
