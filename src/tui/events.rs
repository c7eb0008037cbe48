//! Event handling for the TUI.
//!
//! Polls crossterm for key, mouse and resize events and applies them to the
//! [`App`]. Every input is handled synchronously; a selection change is
//! fully applied before the next frame is drawn.

use super::App;
use crate::model::Section;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Poll interval elapsed without input
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    app.clear_status_message();

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => app.close_help(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(section) = Section::from_shortcut(c) {
                app.select(section);
            }
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.select_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
        KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Handle mouse events: a left click on a menu label selects that section.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.show_help {
                app.close_help();
                return;
            }
            if let Some(section) = app.menu_hit(mouse.column, mouse.row) {
                app.select(section);
            }
        }
        MouseEventKind::Down(MouseButton::Right) => app.close_help(),
        _ => {}
    }
}

/// Apply one polled event to the app.
pub fn dispatch(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => app.request_redraw(),
        // Nothing changes between inputs; the loop just polls again
        Event::Tick => {}
    }
}
