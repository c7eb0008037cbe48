//! Small reusable widgets for the shell.

use crate::tui::theme::{Styles, colors};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled("Terminal too small", Styles::notice().bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::text()),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect using up certain percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render a bordered popup with the given lines, clearing what is underneath.
pub fn render_popup(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Styles::header_title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert!(check_terminal_size(60, 16).is_ok());
        assert_eq!(check_terminal_size(59, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
        assert_eq!(check_terminal_size(80, 10), Err((MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert!(inner.x >= 25 && inner.right() <= 75);
        assert!(inner.y >= 10 && inner.bottom() <= 30);
    }
}
