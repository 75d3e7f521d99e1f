use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

// durable storage key holding "dark" or "light"
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

// durable storage for the theme flag
//
// the browser implementation is local storage; either call may fail when
// storage is disabled or full
pub trait ThemeStore {
    type Error: fmt::Display;

    fn load(&self) -> Result<Option<String>, Self::Error>;

    fn save(&mut self, value: &str) -> Result<(), Self::Error>;
}

// theme preference
//
// single writer for the light/dark flag.  when the store fails, on load or on
// any later save, it is dropped and the rest of the session keeps the theme in
// memory only
#[derive(Debug)]
pub struct ThemeState<S: ThemeStore> {
    theme: Theme,
    store: Option<S>,
}

impl<S: ThemeStore> ThemeState<S> {
    pub fn load(store: S) -> Self {
        let (theme, store) = match store.load() {
            Ok(Some(value)) => match value.parse::<Theme>() {
                Ok(theme) => (theme, Some(store)),
                Err(err) => {
                    warn!("ignoring stored theme: {err}");
                    (Theme::default(), Some(store))
                }
            },
            Ok(None) => (Theme::default(), Some(store)),
            Err(err) => {
                warn!("theme storage unavailable, keeping preference in memory: {err}");
                (Theme::default(), None)
            }
        };

        debug!({ theme = %theme }, "loaded theme");
        ThemeState { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!({ theme = %self.theme }, "toggled theme");

        if let Some(store) = self.store.as_mut() {
            if let Err(err) = store.save(self.theme.as_str()) {
                warn!("failed to persist theme, keeping it in memory: {err}");
                self.store = None;
            }
        }

        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStore {
        value: Option<String>,
        broken: bool,
        saves: usize,
    }

    impl ThemeStore for MemoryStore {
        type Error = &'static str;

        fn load(&self) -> Result<Option<String>, Self::Error> {
            if self.broken {
                Err("storage disabled")
            } else {
                Ok(self.value.clone())
            }
        }

        fn save(&mut self, value: &str) -> Result<(), Self::Error> {
            if self.broken {
                return Err("quota exceeded");
            }
            self.saves += 1;
            self.value = Some(value.to_owned());
            Ok(())
        }
    }

    #[test]
    fn defaults_to_light() {
        let state = ThemeState::load(MemoryStore::default());
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.is_persistent());
    }

    #[test]
    fn reads_stored_dark() {
        let state = ThemeState::load(MemoryStore {
            value: Some("dark".into()),
            ..MemoryStore::default()
        });
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn garbage_value_falls_back_to_light() {
        let state = ThemeState::load(MemoryStore {
            value: Some("solarized".into()),
            ..MemoryStore::default()
        });
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut state = ThemeState::load(MemoryStore::default());
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.toggle(), Theme::Light);

        let store = state.store.as_ref().expect("store kept");
        assert_eq!(store.saves, 2);
        assert_eq!(store.value.as_deref(), Some("light"));
    }

    #[test]
    fn unavailable_storage_is_not_fatal() {
        let mut state = ThemeState::load(MemoryStore {
            broken: true,
            ..MemoryStore::default()
        });
        assert!(!state.is_persistent());
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn failed_save_drops_to_memory() {
        let mut state = ThemeState::load(MemoryStore::default());
        if let Some(store) = state.store.as_mut() {
            store.broken = true;
        }

        assert_eq!(state.toggle(), Theme::Dark);
        assert!(!state.is_persistent());
        assert_eq!(state.toggle(), Theme::Light);
    }

    #[test]
    fn parses_storage_values() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
