use crate::core::SearchState;
use crate::services::Theme;
use crate::views::{View, EXAMPLE_QUERY};

const RESET: &str = "\x1b[0m";

/// ANSI styles for one theme
struct Palette {
    heading: &'static str,
    accent: &'static str,
    dim: &'static str,
    error: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            // Bright text against a dark terminal background.
            Theme::Dark => Palette {
                heading: "\x1b[1;97m",
                accent: "\x1b[36m",
                dim: "\x1b[90m",
                error: "\x1b[91m",
            },
            // Saturated colors that stay readable on light backgrounds.
            Theme::Light => Palette {
                heading: "\x1b[1;30m",
                accent: "\x1b[34m",
                dim: "\x1b[2m",
                error: "\x1b[31m",
            },
        }
    }
}

/// One interest chip inside a profile card
struct InterestTag(String);

impl InterestTag {
    fn render(&self, palette: &Palette) -> String {
        format!("{}#{}{}", palette.dim, self.0, RESET)
    }
}

/// One matched profile, lowered from the wire model
struct ProfileCard {
    name: String,
    bio: String,
    tags: Vec<InterestTag>,
    vibe: String,
}

impl ProfileCard {
    fn render(&self, palette: &Palette) -> String {
        let mut lines = vec![format!("{}{}{}", palette.accent, self.name, RESET)];
        if !self.bio.is_empty() {
            lines.push(format!("  {}", self.bio));
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| t.render(palette)).collect();
            lines.push(format!("  {}", tags.join(" ")));
        }
        if !self.vibe.is_empty() {
            lines.push(format!("  {}{}{}", palette.dim, self.vibe, RESET));
        }
        lines.join("\n")
    }
}

/// A renderable piece of the view tree
enum Component {
    /// The service's explanation of the match set.
    Banner(String),
    /// Informational line: idle hint, progress, empty result set.
    Notice(String),
    /// The user-facing failure message.
    Alert(String),
    Card(ProfileCard),
}

impl Component {
    fn render(&self, palette: &Palette) -> String {
        match self {
            Component::Banner(text) => format!("{}{}{}", palette.heading, text, RESET),
            Component::Notice(text) => format!("{}{}{}", palette.dim, text, RESET),
            Component::Alert(text) => format!("{}{}{}", palette.error, text, RESET),
            Component::Card(card) => card.render(palette),
        }
    }
}

/// Styled card view
///
/// Declarative counterpart to `PlainView`: the state is first lowered
/// into a tree of components, which then render themselves with the
/// active theme's palette.
pub struct CardView {
    theme: Theme,
}

impl CardView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn compose(state: &SearchState) -> Vec<Component> {
        match state {
            SearchState::Idle => vec![Component::Notice(format!(
                "Type a query to find people, e.g. {}",
                EXAMPLE_QUERY
            ))],
            SearchState::Loading => vec![Component::Notice("Searching...".to_string())],
            SearchState::Error(message) => vec![Component::Alert(message.clone())],
            SearchState::Success(response) => {
                let mut components = vec![Component::Banner(response.explanation.clone())];
                if response.matches.is_empty() {
                    components.push(Component::Notice("No matches found.".to_string()));
                } else {
                    components.extend(response.matches.iter().map(|profile| {
                        Component::Card(ProfileCard {
                            name: profile.name.clone(),
                            bio: profile.bio.clone(),
                            tags: profile
                                .interests
                                .iter()
                                .cloned()
                                .map(InterestTag)
                                .collect(),
                            vibe: profile.vibe.clone(),
                        })
                    }));
                }
                components
            }
        }
    }
}

impl View for CardView {
    fn render(&self, state: &SearchState) -> String {
        let palette = Palette::for_theme(self.theme);
        let rendered: Vec<String> = Self::compose(state)
            .iter()
            .map(|component| component.render(&palette))
            .collect();
        let mut out = rendered.join("\n\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SEARCH_FAILED_MESSAGE;
    use crate::models::{Profile, ProfileId, SearchResponse};

    fn sample_success() -> SearchState {
        SearchState::Success(SearchResponse {
            explanation: "3 great matches".to_string(),
            matches: vec![Profile {
                id: ProfileId::Number(1),
                name: "Ava".to_string(),
                bio: "Painter".to_string(),
                interests: vec!["hiking".to_string(), "film".to_string()],
                vibe: "witty".to_string(),
            }],
        })
    }

    #[test]
    fn test_success_renders_banner_and_card() {
        let out = CardView::new(Theme::Dark).render(&sample_success());

        assert!(out.contains("3 great matches"));
        assert!(out.contains("Ava"));
        assert!(out.contains("Painter"));
        assert!(out.contains("#hiking"));
        assert!(out.contains("#film"));
        assert!(out.contains("witty"));
    }

    #[test]
    fn test_palettes_differ_between_themes() {
        let dark = CardView::new(Theme::Dark).render(&sample_success());
        let light = CardView::new(Theme::Light).render(&sample_success());

        assert_ne!(dark, light);
    }

    #[test]
    fn test_error_uses_alert_styling() {
        let out = CardView::new(Theme::Dark)
            .render(&SearchState::Error(SEARCH_FAILED_MESSAGE.to_string()));

        assert!(out.contains(SEARCH_FAILED_MESSAGE));
        assert!(out.contains("\x1b[91m"));
    }

    #[test]
    fn test_empty_matches_render_notice() {
        let out = CardView::new(Theme::Light).render(&SearchState::Success(SearchResponse {
            explanation: "No matches found for your query".to_string(),
            matches: vec![],
        }));

        assert!(out.contains("No matches found."));
    }

    #[test]
    fn test_idle_hints_example_query() {
        let out = CardView::new(Theme::Dark).render(&SearchState::Idle);
        assert!(out.contains(EXAMPLE_QUERY));
    }
}
