use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving the theme preference
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode theme file: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Appearance theme for the card view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// On-disk shape of the preference file
#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Persisted theme preference
///
/// Loaded once at startup and written back on every change. Entirely
/// independent of search state; a failed save never disturbs a search.
#[derive(Debug)]
pub struct ThemeStore {
    path: PathBuf,
    current: Theme,
}

impl ThemeStore {
    /// Load the stored preference, falling back to `fallback` when the
    /// file does not exist yet.
    pub fn load(path: impl Into<PathBuf>, fallback: Theme) -> Result<Self, ThemeError> {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str::<ThemeFile>(&text)?.theme,
            Err(e) if e.kind() == io::ErrorKind::NotFound => fallback,
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Change the preference and persist it immediately.
    pub fn set(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.current = theme;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let text = toml::to_string(&ThemeFile { theme })?;
        fs::write(&self.path, text)?;

        tracing::debug!("Theme preference saved: {}", theme);

        Ok(())
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        self.set(self.current.toggled())?;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let store = ThemeStore::load(&path, Theme::Light).unwrap();
        assert_eq!(store.current(), Theme::Light);
        assert!(!path.exists(), "load alone must not create the file");
    }

    #[test]
    fn test_set_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("theme.toml");

        let mut store = ThemeStore::load(&path, Theme::Dark).unwrap();
        store.set(Theme::Light).unwrap();

        let reloaded = ThemeStore::load(&path, Theme::Dark).unwrap();
        assert_eq!(reloaded.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut store = ThemeStore::load(&path, Theme::Dark).unwrap();
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);

        let reloaded = ThemeStore::load(&path, Theme::Light).unwrap();
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "theme = \"plaid\"").unwrap();

        assert!(matches!(
            ThemeStore::load(&path, Theme::Dark),
            Err(ThemeError::Parse(_))
        ));
    }
}
