//! Section dispatch and the section placeholder components.
//!
//! Each section currently draws an empty container with an aside region and
//! a contents region. [`resolve`] maps a [`Section`] to its component; the
//! match is exhaustive, so a missing entry is a compile error.

use crate::model::Section;
use crate::tui::theme::{Styles, colors};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

/// Width of the aside column, as a percentage of the container.
const ASIDE_PERCENT: u16 = 25;

/// Regions of a section container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub aside: Rect,
    pub contents: Rect,
}

/// A renderable section leaf.
pub trait SectionComponent {
    /// The section this component belongs to.
    fn section(&self) -> Section;

    /// Container identifier.
    fn id(&self) -> &'static str {
        self.section().as_str()
    }

    /// Items for the aside region. Empty for now.
    fn aside_items(&self) -> Vec<Line<'static>> {
        Vec::new()
    }

    /// Lines for the contents region. Empty for now.
    fn main_contents(&self) -> Vec<Line<'static>> {
        Vec::new()
    }

    /// Draw the container into `area`.
    fn render(&self, frame: &mut Frame, area: Rect) {
        render_container(frame, area, self);
    }
}

/// Roles section.
#[derive(Debug, Clone, Copy, Default)]
pub struct Roles;

/// Teams section.
#[derive(Debug, Clone, Copy, Default)]
pub struct Teams;

/// People section.
#[derive(Debug, Clone, Copy, Default)]
pub struct People;

impl SectionComponent for Roles {
    fn section(&self) -> Section {
        Section::Roles
    }
}

impl SectionComponent for Teams {
    fn section(&self) -> Section {
        Section::Teams
    }
}

impl SectionComponent for People {
    fn section(&self) -> Section {
        Section::People
    }
}

/// Build the component for `selection`.
///
/// A new component is built on every call; nothing is cached between frames.
#[must_use]
pub fn resolve(selection: Section) -> Box<dyn SectionComponent> {
    match selection {
        Section::Roles => Box::new(Roles),
        Section::Teams => Box::new(Teams),
        Section::People => Box::new(People),
    }
}

/// Split the inner area of a section container into aside and contents.
#[must_use]
pub fn layout(inner: Rect) -> SectionLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(ASIDE_PERCENT),
            Constraint::Percentage(100 - ASIDE_PERCENT),
        ])
        .split(inner);
    SectionLayout {
        aside: chunks[0],
        contents: chunks[1],
    }
}

fn render_container<C: SectionComponent + ?Sized>(frame: &mut Frame, area: Rect, component: &C) {
    let container = Block::default()
        .title(format!(" {} ", component.section().title()))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    let inner = container.inner(area);
    frame.render_widget(container, area);

    let regions = layout(inner);

    let aside = ratatui::widgets::Paragraph::new(component.aside_items()).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(colors().border)),
    );
    frame.render_widget(aside, regions.aside);

    let contents = ratatui::widgets::Paragraph::new(component.main_contents());
    frame.render_widget(contents, regions.contents);
}
