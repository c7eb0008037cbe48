//! Terminal UI using ratatui.
//!
//! The shell is a header with the application title and a three-entry menu,
//! the selected section below it, and a status bar and footer at the bottom.
//!
//! State lives in [`App`]; [`events`] maps input to state changes and
//! [`ui`] draws a frame from the state. A frame is only drawn after a change.

mod app;
pub mod events;
pub mod theme;
pub mod ui;
pub(crate) mod widgets;

pub use app::App;
pub use events::{Event, EventHandler, handle_key_event, handle_mouse_event};
pub use theme::{ColorScheme, FooterHints, Styles, Theme, colors, current_theme_name, set_theme};
pub use ui::{APP_TITLE, render, run_tui};
