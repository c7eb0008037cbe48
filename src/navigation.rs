//! Navigation and selection state.
//!
//! [`Navigator`] owns the currently selected [`Section`]. Readers get an
//! immutable snapshot through [`Navigator::selected`] or [`Navigator::menu`];
//! the only way to change the selection is [`Navigator::select`].

use crate::model::Section;

/// One rendered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub section: Section,
    /// True iff this entry is the current selection
    pub active: bool,
}

/// Owner of the selection state.
#[derive(Debug, Clone)]
pub struct Navigator {
    selected: Section,
    /// Number of `select` calls so far
    revision: u64,
    /// Set when the menu and content area must be drawn again
    redraw: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

impl Navigator {
    /// Create a navigator with `initial` selected.
    ///
    /// The first frame always needs drawing, so a fresh navigator starts
    /// with a pending redraw.
    #[must_use]
    pub const fn new(initial: Section) -> Self {
        Self {
            selected: initial,
            revision: 0,
            redraw: true,
        }
    }

    /// The fixed, ordered list of sections shown in the menu.
    #[must_use]
    pub const fn selectable() -> &'static [Section] {
        &Section::ALL
    }

    /// Current selection.
    #[must_use]
    pub const fn selected(&self) -> Section {
        self.selected
    }

    /// Replace the selection and request one redraw.
    ///
    /// Re-selecting the current section still counts as a change.
    pub fn select(&mut self, section: Section) {
        tracing::debug!(from = %self.selected, to = %section, "section selected");
        self.selected = section;
        self.revision += 1;
        self.redraw = true;
    }

    /// Select the entry after the current one, wrapping at the end.
    pub fn select_next(&mut self) {
        let all = Self::selectable();
        let next = all[(self.selected.index() + 1) % all.len()];
        self.select(next);
    }

    /// Select the entry before the current one, wrapping at the start.
    pub fn select_prev(&mut self) {
        let all = Self::selectable();
        let prev = all[(self.selected.index() + all.len() - 1) % all.len()];
        self.select(prev);
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.selected == section
    }

    /// Menu entries in display order with their active marker.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuEntry> {
        Self::selectable()
            .iter()
            .map(|&section| MenuEntry {
                section,
                active: self.is_active(section),
            })
            .collect()
    }

    /// Count of selection changes since construction.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Request a redraw without changing the selection (resize, theme change).
    pub const fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Consume the pending redraw, returning whether there was one.
    pub const fn take_redraw(&mut self) -> bool {
        let pending = self.redraw;
        self.redraw = false;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_section() -> impl Strategy<Value = Section> {
        prop_oneof![
            Just(Section::Roles),
            Just(Section::Teams),
            Just(Section::People),
        ]
    }

    #[test]
    fn test_initial_selection() {
        assert_eq!(Navigator::default().selected(), Section::Roles);
        assert_eq!(Navigator::new(Section::Teams).selected(), Section::Teams);
    }

    #[test]
    fn test_selectable_order() {
        assert_eq!(
            Navigator::selectable(),
            &[Section::Roles, Section::Teams, Section::People]
        );
    }

    #[test]
    fn test_select_replaces_state() {
        let mut nav = Navigator::default();
        nav.select(Section::People);
        assert_eq!(nav.selected(), Section::People);
        assert!(nav.is_active(Section::People));
        assert!(!nav.is_active(Section::Roles));
    }

    #[test]
    fn test_each_select_requests_one_redraw() {
        let mut nav = Navigator::default();
        assert!(nav.take_redraw(), "first frame must be drawn");
        assert!(!nav.take_redraw());

        nav.select(Section::Teams);
        assert_eq!(nav.revision(), 1);
        assert!(nav.take_redraw());
        assert!(!nav.take_redraw());

        // Same section again still redraws
        nav.select(Section::Teams);
        assert_eq!(nav.revision(), 2);
        assert!(nav.take_redraw());
    }

    #[test]
    fn test_cycle_wraps() {
        let mut nav = Navigator::new(Section::People);
        nav.select_next();
        assert_eq!(nav.selected(), Section::Roles);
        nav.select_prev();
        assert_eq!(nav.selected(), Section::People);
        nav.select_prev();
        assert_eq!(nav.selected(), Section::Teams);
    }

    #[test]
    fn test_menu_marks_selection() {
        let mut nav = Navigator::default();
        nav.select(Section::Teams);
        let menu = nav.menu();
        assert_eq!(
            menu,
            vec![
                MenuEntry { section: Section::Roles, active: false },
                MenuEntry { section: Section::Teams, active: true },
                MenuEntry { section: Section::People, active: false },
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_last_select_wins(seq in proptest::collection::vec(any_section(), 1..32)) {
            let mut nav = Navigator::default();
            for &section in &seq {
                nav.select(section);
            }
            prop_assert_eq!(nav.selected(), *seq.last().unwrap());
            prop_assert_eq!(nav.revision(), seq.len() as u64);
        }

        #[test]
        fn prop_exactly_one_active(initial in any_section(), next in any_section()) {
            let mut nav = Navigator::new(initial);
            nav.select(next);
            let menu = nav.menu();
            prop_assert_eq!(menu.len(), 3);
            prop_assert_eq!(menu.iter().filter(|e| e.active).count(), 1);
            let active = menu.iter().find(|e| e.active).map(|e| e.section);
            prop_assert_eq!(active, Some(next));
        }

        #[test]
        fn prop_selectable_ignores_state(seq in proptest::collection::vec(any_section(), 0..8)) {
            let mut nav = Navigator::default();
            for section in seq {
                nav.select(section);
            }
            let order: Vec<_> = nav.menu().iter().map(|e| e.section.title()).collect();
            prop_assert_eq!(order, vec!["Roles", "Teams", "People"]);
        }
    }
}
