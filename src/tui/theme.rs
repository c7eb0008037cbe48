//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across the header, menu,
//! sections and overlays.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Colors for each part of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Application title and section titles
    pub title: Color,
    /// Active menu entry and key hints
    pub accent: Color,
    /// Background behind the active menu entry
    pub menu_active_bg: Color,
    pub border: Color,
    /// Border of the section container
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub status_bg: Color,
    /// Connection marker in the status bar
    pub ok: Color,
    /// Status messages
    pub notice: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    pub const fn dark() -> Self {
        Self {
            title: Color::Cyan,
            accent: Color::Yellow,
            menu_active_bg: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            status_bg: Color::Rgb(30, 30, 40),
            ok: Color::Green,
            notice: Color::Yellow,
        }
    }

    pub const fn light() -> Self {
        Self {
            title: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            menu_active_bg: Color::Rgb(200, 220, 240),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            status_bg: Color::Rgb(240, 240, 245),
            ok: Color::Rgb(0, 128, 0),
            notice: Color::Rgb(180, 90, 0),
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            title: Color::LightCyan,
            accent: Color::LightYellow,
            menu_active_bg: Color::Blue,
            border: Color::White,
            border_focused: Color::LightCyan,
            text: Color::White,
            text_muted: Color::Gray,
            status_bg: Color::Black,
            ok: Color::LightGreen,
            notice: Color::LightYellow,
        }
    }
}

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().title).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().title).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Active menu entry
    pub fn menu_active() -> Style {
        Style::default()
            .fg(colors().accent)
            .bg(colors().menu_active_bg)
            .bold()
    }

    /// Inactive menu entry
    pub fn menu_inactive() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().status_bg)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Connection marker
    pub fn connection() -> Style {
        Style::default().fg(colors().ok)
    }

    /// Status message
    pub fn notice() -> Style {
        Style::default().fg(colors().notice)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Key hints shown in the footer.
pub struct FooterHints;

impl FooterHints {
    /// Hints available everywhere in the shell
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-3", "section"),
            ("Tab/←→", "next/prev"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }

    /// Hints while the help overlay is open
    pub fn help_overlay() -> Vec<(&'static str, &'static str)> {
        vec![("Esc/?", "close help")]
    }
}

/// Render footer hints as styled spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled(format!(" {desc}"), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_theme_rotation() {
        let dark = Theme::dark();
        let light = dark.next();
        let hc = light.next();
        assert_eq!(light.name, "light");
        assert_eq!(hc.name, "high-contrast");
        assert_eq!(hc.next().name, "dark");
    }

    #[test]
    fn test_active_menu_stands_out() {
        for theme in [Theme::dark(), Theme::light(), Theme::high_contrast()] {
            let c = theme.colors;
            assert_ne!(c.accent, c.text_muted, "{}", theme.name);
            assert_ne!(c.menu_active_bg, c.status_bg, "{}", theme.name);
        }
    }

    #[test]
    fn test_footer_hints_layout() {
        let spans = render_footer_hints(&[("q", "quit"), ("?", "help")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[q] quit [?] help");
    }
}
