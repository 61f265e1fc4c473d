//! Light/dark theme selection
//!
//! An explicitly chosen theme is persisted and wins over the system signal.
//! Without one, the theme follows the system as it changes.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "🔆",
            Self::Dark => "🌙",
        }
    }
}

/// The persisted theme slot. `None` means no explicit preference.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send {
    fn load_theme(&self) -> Result<Option<Theme>>;
    fn save_theme(&mut self, theme: Theme) -> Result<()>;
    fn clear_theme(&mut self) -> Result<()>;
}

/// Source of the system-wide "prefers dark" signal
#[cfg_attr(test, mockall::automock)]
pub trait SystemThemeSource: Send {
    fn prefers_dark(&self) -> bool;
}

/// Env var that forces the system signal (`dark` or `light`)
pub const APPEARANCE_ENV: &str = "CONTACT_TUI_APPEARANCE";

/// Reads the terminal's appearance from the environment
#[derive(Debug, Default)]
pub struct TerminalThemeSource;

impl SystemThemeSource for TerminalThemeSource {
    fn prefers_dark(&self) -> bool {
        if let Ok(value) = env::var(APPEARANCE_ENV) {
            if let Some(dark) = parse_appearance(&value) {
                return dark;
            }
        }
        env::var("COLORFGBG")
            .ok()
            .and_then(|v| prefers_dark_from_colorfgbg(&v))
            .unwrap_or(false)
    }
}

fn parse_appearance(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;extra;bg`); ANSI backgrounds 0-6 and 8 are dark
fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

/// Current theme plus the persisted preference behind it
pub struct ThemeManager {
    current: Theme,
    explicit: bool,
    store: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    /// Pick the persisted theme, falling back to the system signal
    pub fn load(store: Box<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let saved = store.load_theme().unwrap_or_else(|e| {
            tracing::warn!("Failed to read theme preference: {e}");
            None
        });
        let (current, explicit) = match saved {
            Some(theme) => (theme, true),
            None => (Theme::from_prefers_dark(system_prefers_dark), false),
        };
        tracing::debug!("Initial theme {} (explicit: {explicit})", current.as_str());
        Self {
            current,
            explicit,
            store,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.explicit
    }

    /// Follow a system change unless the user picked a theme. Returns whether the theme changed.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if self.explicit {
            return false;
        }
        let next = Theme::from_prefers_dark(prefers_dark);
        if next == self.current {
            return false;
        }
        tracing::debug!("Following system theme: {}", next.as_str());
        self.current = next;
        true
    }

    /// Flip the theme and persist it as an explicit choice
    ///
    /// Nothing changes when the choice cannot be saved.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggle();
        self.store.save_theme(next)?;
        self.current = next;
        self.explicit = true;
        Ok(next)
    }

    /// Forget the explicit choice and go back to following the system
    pub fn clear_preference(&mut self, system_prefers_dark: bool) -> Result<()> {
        self.store.clear_theme()?;
        self.explicit = false;
        self.current = Theme::from_prefers_dark(system_prefers_dark);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory slot shared with the test so persisted values can be inspected
    #[derive(Clone, Default)]
    struct MemoryStore(Arc<Mutex<Option<Theme>>>);

    impl PreferenceStore for MemoryStore {
        fn load_theme(&self) -> Result<Option<Theme>> {
            Ok(*self.0.lock().unwrap())
        }
        fn save_theme(&mut self, theme: Theme) -> Result<()> {
            *self.0.lock().unwrap() = Some(theme);
            Ok(())
        }
        fn clear_theme(&mut self) -> Result<()> {
            *self.0.lock().unwrap() = None;
            Ok(())
        }
    }

    mod theme_enum {
        use super::*;

        #[test]
        fn test_toggle() {
            assert_eq!(Theme::Light.toggle(), Theme::Dark);
            assert_eq!(Theme::Dark.toggle(), Theme::Light);
        }

        #[test]
        fn test_serializes_lowercase() {
            assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
            let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
            assert_eq!(parsed, Theme::Light);
        }
    }

    mod system_signal {
        use super::*;

        #[test]
        fn test_colorfgbg_dark_background() {
            assert_eq!(prefers_dark_from_colorfgbg("15;0"), Some(true));
            assert_eq!(prefers_dark_from_colorfgbg("15;default;0"), Some(true));
        }

        #[test]
        fn test_colorfgbg_light_background() {
            assert_eq!(prefers_dark_from_colorfgbg("0;15"), Some(false));
            assert_eq!(prefers_dark_from_colorfgbg("0;7"), Some(false));
        }

        #[test]
        fn test_colorfgbg_garbage() {
            assert_eq!(prefers_dark_from_colorfgbg("default"), None);
        }

        #[test]
        fn test_parse_appearance() {
            assert_eq!(parse_appearance(" Dark "), Some(true));
            assert_eq!(parse_appearance("light"), Some(false));
            assert_eq!(parse_appearance("auto"), None);
        }
    }

    mod manager {
        use super::*;

        #[test]
        fn test_uses_system_signal_without_preference() {
            let manager = ThemeManager::load(Box::new(MemoryStore::default()), true);
            assert_eq!(manager.current(), Theme::Dark);
            assert!(!manager.has_explicit_preference());
        }

        #[test]
        fn test_persisted_preference_wins() {
            let store = MemoryStore(Arc::new(Mutex::new(Some(Theme::Light))));
            let manager = ThemeManager::load(Box::new(store), true);
            assert_eq!(manager.current(), Theme::Light);
            assert!(manager.has_explicit_preference());
        }

        #[test]
        fn test_follows_system_changes_without_preference() {
            let mut manager = ThemeManager::load(Box::new(MemoryStore::default()), false);
            assert!(manager.on_system_change(true));
            assert_eq!(manager.current(), Theme::Dark);
            assert!(!manager.on_system_change(true));
        }

        #[test]
        fn test_toggle_persists_choice() {
            let store = MemoryStore::default();
            let mut manager = ThemeManager::load(Box::new(store.clone()), false);

            assert_eq!(manager.toggle().unwrap(), Theme::Dark);
            assert_eq!(*store.0.lock().unwrap(), Some(Theme::Dark));
        }

        #[test]
        fn test_reload_with_persisted_choice_ignores_system() {
            let store = MemoryStore::default();
            let mut first = ThemeManager::load(Box::new(store.clone()), false);
            first.toggle().unwrap();

            let mut reloaded = ThemeManager::load(Box::new(store), false);
            assert_eq!(reloaded.current(), Theme::Dark);
            assert!(!reloaded.on_system_change(false));
            assert!(!reloaded.on_system_change(true));
            assert_eq!(reloaded.current(), Theme::Dark);
        }

        #[test]
        fn test_clear_preference_resumes_following_system() {
            let store = MemoryStore::default();
            let mut manager = ThemeManager::load(Box::new(store.clone()), false);
            manager.toggle().unwrap();

            manager.clear_preference(false).unwrap();
            assert_eq!(manager.current(), Theme::Light);
            assert_eq!(*store.0.lock().unwrap(), None);
            assert!(manager.on_system_change(true));
        }

        #[test]
        fn test_unreadable_store_falls_back_to_system() {
            let mut store = MockPreferenceStore::new();
            store
                .expect_load_theme()
                .returning(|| Err(anyhow::anyhow!("corrupt config")));
            let manager = ThemeManager::load(Box::new(store), true);
            assert_eq!(manager.current(), Theme::Dark);
            assert!(!manager.has_explicit_preference());
        }

        #[test]
        fn test_toggle_reports_store_failure() {
            let mut store = MockPreferenceStore::new();
            store.expect_load_theme().returning(|| Ok(None));
            store
                .expect_save_theme()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("read-only")));
            let mut manager = ThemeManager::load(Box::new(store), false);
            assert!(manager.toggle().is_err());

            // Still light and still following the system
            assert_eq!(manager.current(), Theme::Light);
            assert!(!manager.has_explicit_preference());
            assert!(manager.on_system_change(true));
            assert_eq!(manager.current(), Theme::Dark);
        }
    }
}
