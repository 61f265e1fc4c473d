//! Color palettes for the light and dark themes

use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors applied to every widget for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xFF, 0xFB, 0xFE),
                foreground: Color::Rgb(0x1C, 0x1B, 0x1F),
                muted: Color::Rgb(0x79, 0x74, 0x7E),
                accent: Color::Rgb(0x67, 0x50, 0xA4),
                success: Color::Rgb(0x02, 0x9C, 0x76),
                error: Color::Rgb(0xBA, 0x1A, 0x1A),
                warning: Color::Rgb(0xB2, 0x6A, 0x00),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x1C, 0x1B, 0x1F),
                foreground: Color::Rgb(0xE6, 0xE1, 0xE5),
                muted: Color::Rgb(0x93, 0x8F, 0x99),
                accent: Color::Rgb(0xD0, 0xBC, 0xFF),
                success: Color::Rgb(0x4F, 0xD8, 0xB0),
                error: Color::Rgb(0xFF, 0xB4, 0xAB),
                warning: Color::Rgb(0xFF, 0xB9, 0x5C),
            },
        }
    }

    /// Base style for the whole screen
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Border style for focused/unfocused blocks
    pub fn border(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_have_distinct_backgrounds() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.base().bg, Some(light.background));
    }

    #[test]
    fn test_border_uses_accent_when_active() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.border(true).fg, Some(palette.accent));
        assert_eq!(palette.border(false).fg, Some(palette.muted));
    }
}
