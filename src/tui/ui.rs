//! Terminal setup, main loop and rendering.

use super::app::App;
use super::events::{EventHandler, dispatch};
use super::theme::{FooterHints, Styles, current_theme_name, render_footer_hints};
use super::widgets::{
    MIN_HEIGHT, MIN_WIDTH, centered_rect, check_terminal_size, render_popup, render_size_warning,
};
use crate::model::Section;
use crate::navigation::MenuEntry;
use crate::sections;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};
use unicode_width::UnicodeWidthStr;

/// Application title shown in the header.
pub const APP_TITLE: &str = "Company Management";

/// Columns between two menu labels.
const MENU_GAP: u16 = 1;

/// Run the TUI application until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut terminal, app, &events);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| render(frame, app))?;
        }

        dispatch(app, events.next()?);

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        app.menu_hits.clear();
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: title + menu
            Constraint::Min(5),    // Current section
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    sections::resolve(app.selected()).render(frame, chunks[1]);

    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(format!(" {APP_TITLE} "))
        .title_style(Styles::header_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.menu();
    let spans: Vec<Span> = entries
        .iter()
        .enumerate()
        .flat_map(|(i, entry)| {
            let gap = (i > 0).then(|| Span::raw(" ".repeat(usize::from(MENU_GAP))));
            let style = if entry.active {
                Styles::menu_active()
            } else {
                Styles::menu_inactive()
            };
            gap.into_iter()
                .chain(std::iter::once(Span::styled(menu_label(entry.section), style)))
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    app.menu_hits = menu_layout(&entries, inner);
}

/// Text of a menu label, e.g. `" [1] Roles "`.
#[must_use]
pub fn menu_label(section: Section) -> String {
    format!(" [{}] {} ", section.shortcut(), section.title())
}

/// Screen rectangle of each menu label when drawn on the first row of `area`.
///
/// Labels that fall fully outside `area` are omitted; a partly visible label
/// is clipped to the area.
#[must_use]
pub fn menu_layout(entries: &[MenuEntry], area: Rect) -> Vec<(Section, Rect)> {
    let mut hits = Vec::with_capacity(entries.len());
    let mut x = area.x;
    let right = area.right();

    for entry in entries {
        if x >= right || area.height == 0 {
            break;
        }
        let width = menu_label(entry.section).width() as u16;
        let visible = width.min(right - x);
        hits.push((entry.section, Rect::new(x, area.y, visible, 1)));
        x = x.saturating_add(width + MENU_GAP);
    }

    hits
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let client = app.client();
    let mut spans = vec![
        Span::styled(" ● ", Styles::connection()),
        Span::styled(app.selected().title(), Styles::text().bold()),
        Span::styled("  │  GraphQL: ", Styles::text_muted()),
        Span::styled(client.endpoint().to_string(), Styles::text()),
        Span::styled(
            format!("  │  cache: {} entries", client.cache().len()),
            Styles::text_muted(),
        ),
        Span::styled(
            format!("  │  theme: {}", current_theme_name()),
            Styles::text_muted(),
        ),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled("  │  ", Styles::text_muted()));
        spans.push(Span::styled(msg.clone(), Styles::notice().bold()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.show_help {
        FooterHints::help_overlay()
    } else {
        FooterHints::global()
    };
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {k:<12}"), Styles::shortcut_key()),
            Span::styled(desc.to_string(), Styles::text()),
        ])
    };

    let mut lines = vec![Line::from("")];
    for section in Section::ALL {
        lines.push(key(
            &section.shortcut().to_string(),
            &format!("Show {}", section.title()),
        ));
    }
    lines.extend([
        key("Tab / → / l", "Next section"),
        key("S-Tab / ← / h", "Previous section"),
        key("Click", "Select menu entry"),
        key("T", "Cycle theme"),
        key("?", "Toggle this help"),
        key("q / Esc", "Quit"),
    ]);

    render_popup(frame, centered_rect(60, 60, area), "Help", lines);
}
