//! UI theme choice and its persistence.
//!
//! The selected theme is stored under [`THEME_KEY`] as its `data-theme`
//! value (`"dark"`, `"blue"`...). Anything unreadable falls back to
//! [`Theme::Dark`].

use std::fmt;
use std::str::FromStr;

use crate::kv::KeyValueStore;

/// Storage key for the theme choice.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Blue,
    Sepia,
    Purple,
    Teal,
    Pink,
    Orange,
    Green,
    Gray,
}

impl Theme {
    pub const ALL: [Theme; 10] = [
        Theme::Dark,
        Theme::Light,
        Theme::Blue,
        Theme::Sepia,
        Theme::Purple,
        Theme::Teal,
        Theme::Pink,
        Theme::Orange,
        Theme::Green,
        Theme::Gray,
    ];

    /// Value used for the root element's class and `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Blue => "blue",
            Theme::Sepia => "sepia",
            Theme::Purple => "purple",
            Theme::Teal => "teal",
            Theme::Pink => "pink",
            Theme::Orange => "orange",
            Theme::Green => "green",
            Theme::Gray => "gray",
        }
    }

    /// Human-readable name for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Blue => "Ocean Blue",
            Theme::Sepia => "Warm Sepia",
            Theme::Purple => "Royal Purple",
            Theme::Teal => "Emerald Teal",
            Theme::Pink => "Rose Pink",
            Theme::Orange => "Sunset Orange",
            Theme::Green => "Forest Green",
            Theme::Gray => "Slate Gray",
        }
    }

    pub fn is_dark(self) -> bool {
        !matches!(self, Theme::Light | Theme::Sepia)
    }

    /// Light becomes dark; every other theme becomes light.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn load<S: KeyValueStore>(store: &S) -> Theme {
        store
            .get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn save<S: KeyValueStore>(self, store: &S) {
        store.set(THEME_KEY, self.as_str());
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for theme names outside [`Theme::ALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_default_is_dark_when_nothing_stored() {
        assert_eq!(Theme::load(&MemoryStore::new()), Theme::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        Theme::Sepia.save(&store);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("sepia"));
        assert_eq!(Theme::load(&store), Theme::Sepia);
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_dark() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "neon");
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Teal.toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Blue".parse::<Theme>(), Ok(Theme::Blue));
        assert_eq!(" gray ".parse::<Theme>(), Ok(Theme::Gray));
        assert!("ocean".parse::<Theme>().is_err());
    }

    #[test]
    fn test_every_theme_roundtrips_through_its_name() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
            assert!(!theme.label().is_empty());
        }
    }
}
