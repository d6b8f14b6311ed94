pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("problem-statements", "Problem Statements"),
    ("timeline", "Timeline"),
    ("contact", "Contact"),
];

pub const NAV_LINK_CLASS: &str = "nav-link";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

pub fn scroll_locked(menu: MenuState, modal_open: bool) -> bool {
    menu.open || modal_open
}

/// Navigation entries whose section exists in the document, paired so the
/// active marker can never land on a link whose section is missing.
#[derive(Clone, Debug, PartialEq)]
pub struct NavRegistry<S> {
    entries: Vec<(&'static str, S)>,
}

impl<S> Default for NavRegistry<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> NavRegistry<S> {
    pub fn resolve(
        sections: &[(&'static str, &'static str)],
        mut find: impl FnMut(&str) -> Option<S>,
    ) -> Self {
        let entries = sections
            .iter()
            .filter_map(|(id, _)| find(id).map(|section| (*id, section)))
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn sections(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|(_, section)| section)
    }

    pub fn id_at(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{nearest_to_viewport_center, SectionBox};

    #[test]
    fn toggle_and_close() {
        let menu = MenuState::default();
        assert_eq!(menu.aria_expanded(), "false");

        let opened = menu.toggled();
        assert!(opened.open);
        assert_eq!(opened.aria_expanded(), "true");
        assert!(!opened.toggled().open);
        assert!(!opened.closed().open);
        assert!(!menu.closed().open);
    }

    #[test]
    fn scroll_lock_holds_while_either_surface_is_open() {
        let open = MenuState { open: true };
        let closed = MenuState::default();

        assert!(scroll_locked(open, false));
        assert!(scroll_locked(closed, true));
        assert!(scroll_locked(open, true));
        assert!(!scroll_locked(closed, false));
    }

    #[test]
    fn registry_skips_links_without_sections() {
        let registry = NavRegistry::resolve(NAV_SECTIONS, |id| (id != "about").then(|| id.len()));

        assert_eq!(registry.len(), NAV_SECTIONS.len() - 1);
        assert_eq!(registry.id_at(0), Some("home"));
        assert_eq!(registry.id_at(1), Some("problem-statements"));
    }

    #[test]
    fn active_marker_follows_the_paired_link() {
        let boxes = [
            ("home", SectionBox { top: -2_000.0, height: 600.0 }),
            ("problem-statements", SectionBox { top: 100.0, height: 600.0 }),
            ("timeline", SectionBox { top: 900.0, height: 600.0 }),
        ];
        let registry = NavRegistry::resolve(NAV_SECTIONS, |id| {
            boxes
                .iter()
                .find(|(candidate, _)| *candidate == id)
                .map(|(_, section)| *section)
        });

        let active = nearest_to_viewport_center(registry.sections().copied(), 800.0)
            .and_then(|index| registry.id_at(index));
        assert_eq!(active, Some("problem-statements"));
    }

    #[test]
    fn empty_registry_marks_nothing() {
        let registry: NavRegistry<SectionBox> = NavRegistry::resolve(NAV_SECTIONS, |_| None);

        assert_eq!(registry.len(), 0);
        let active = nearest_to_viewport_center(registry.sections().copied(), 800.0)
            .and_then(|index| registry.id_at(index));
        assert_eq!(active, None);
    }
}
