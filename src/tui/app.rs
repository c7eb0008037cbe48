//! Application state for the TUI.

use crate::client::GraphQlClient;
use crate::config::TuiPreferences;
use crate::model::Section;
use crate::navigation::{MenuEntry, Navigator};
use crate::tui::theme::toggle_theme;
use ratatui::layout::{Position, Rect};
use std::sync::Arc;

/// Main application state
pub struct App {
    /// Selection state and redraw bookkeeping
    pub(crate) navigation: Navigator,
    /// Shared, read-only GraphQL client
    pub(crate) client: Arc<GraphQlClient>,
    /// Should quit
    pub(crate) should_quit: bool,
    /// Help overlay visibility
    pub(crate) show_help: bool,
    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,
    /// Whether mouse clicks are handled
    pub(crate) mouse_enabled: bool,
    /// Save the theme when it is cycled
    pub(crate) persist_theme: bool,
    /// Screen position of each menu label in the last drawn frame
    pub(crate) menu_hits: Vec<(Section, Rect)>,
}

impl App {
    /// Create the application state with `initial` selected.
    pub fn new(client: Arc<GraphQlClient>, initial: Section) -> Self {
        Self {
            navigation: Navigator::new(initial),
            client,
            should_quit: false,
            show_help: false,
            status_message: None,
            mouse_enabled: true,
            persist_theme: false,
            menu_hits: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Write theme changes to the preferences file.
    #[must_use]
    pub const fn with_persisted_theme(mut self, persist: bool) -> Self {
        self.persist_theme = persist;
        self
    }

    #[must_use]
    pub const fn selected(&self) -> Section {
        self.navigation.selected()
    }

    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.navigation.menu()
    }

    #[must_use]
    pub const fn navigation(&self) -> &Navigator {
        &self.navigation
    }

    #[must_use]
    pub fn client(&self) -> &GraphQlClient {
        &self.client
    }

    pub fn select(&mut self, section: Section) {
        self.navigation.select(section);
    }

    pub fn select_next(&mut self) {
        self.navigation.select_next();
    }

    pub fn select_prev(&mut self) {
        self.navigation.select_prev();
    }

    /// Section whose menu label covers the given cell, if any.
    #[must_use]
    pub fn menu_hit(&self, column: u16, row: u16) -> Option<Section> {
        let position = Position::new(column, row);
        self.menu_hits
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(section, _)| *section)
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.navigation.request_redraw();
    }

    pub const fn close_help(&mut self) {
        if self.show_help {
            self.show_help = false;
            self.navigation.request_redraw();
        }
    }

    /// Move to the next theme and optionally remember it.
    pub fn cycle_theme(&mut self) {
        let name = toggle_theme();
        if self.persist_theme {
            let prefs = TuiPreferences {
                theme: name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("Failed to save theme preference: {e}");
            }
        }
        self.set_status_message(format!("Theme: {name}"));
    }

    /// Set a temporary status message
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.navigation.request_redraw();
    }

    /// Clear the status message.
    pub fn clear_status_message(&mut self) {
        if self.status_message.take().is_some() {
            self.navigation.request_redraw();
        }
    }

    pub const fn request_redraw(&mut self) {
        self.navigation.request_redraw();
    }

    /// Whether the next loop iteration must draw, consuming the request.
    pub const fn take_redraw(&mut self) -> bool {
        self.navigation.take_redraw()
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}
