//! Platform-specific key handling

use crossterm::event::KeyModifiers;

/// Platform-appropriate extra modifier for form shortcuts
/// - macOS: SUPER (Cmd key), when the terminal forwards it
/// - Linux/Windows: none beyond Ctrl
#[cfg(target_os = "macos")]
const EXTRA_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
const EXTRA_MODIFIER: KeyModifiers = KeyModifiers::NONE;

/// Ctrl works everywhere; Cmd is also accepted on macOS
pub fn is_shortcut_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL)
        || (!EXTRA_MODIFIER.is_empty() && modifiers.contains(EXTRA_MODIFIER))
}

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Theme toggle shortcut display
pub const THEME_SHORTCUT: &str = "Ctrl+T";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_always_a_shortcut_modifier() {
        assert!(is_shortcut_modifier(KeyModifiers::CONTROL));
        assert!(is_shortcut_modifier(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert!(!is_shortcut_modifier(KeyModifiers::NONE));
        assert!(!is_shortcut_modifier(KeyModifiers::SHIFT));
    }
}
