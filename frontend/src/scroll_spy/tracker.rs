use crate::dom;
use crate::icons::Icon;

/// One entry in a page's table of contents. `id` must match the anchor id
/// of the section element on that page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
}

pub trait SectionLayout {
    fn scroll_y(&self) -> f64;
    /// Absolute top of the section element, `None` if it is not in the DOM.
    fn section_top(&self, id: &str) -> Option<f64>;
}

/// Reads positions from the live document.
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn scroll_y(&self) -> f64 {
        dom::scroll_y()
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        dom::element_by_id(id).ok().map(|element| dom::absolute_top(&element))
    }
}

/// Index of the last section whose top the reader has scrolled past, or 0
/// when none has been passed yet.
pub fn resolve_active(sections: &[Section], layout: &impl SectionLayout, scroll_position: f64) -> usize {
    sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| layout.section_top(section.id).map(|top| (index, top)))
        .filter(|(_, top)| *top <= scroll_position)
        .map(|(index, _)| index)
        .last()
        .unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    sections: &'static [Section],
    /// Added to scrollY so a section counts as active once it reaches the sticky header.
    offset: f64,
    /// Space left above a section when jumping to it.
    clearance: f64,
    active: usize,
}

impl ScrollSpy {
    pub fn new(sections: &'static [Section], offset: f64, clearance: f64) -> Self {
        debug_assert!(!sections.is_empty(), "scroll spy needs at least one section");
        Self { sections, offset, clearance, active: 0 }
    }

    pub fn active_id(&self) -> &'static str {
        self.sections.get(self.active).map(|section| section.id).unwrap_or_default()
    }

    /// Recomputes the active section from the current scroll position.
    /// Returns true if it changed.
    pub fn refresh(&mut self, layout: &impl SectionLayout) -> bool {
        let scroll_position = layout.scroll_y() + self.offset;
        let next = resolve_active(self.sections, layout, scroll_position);
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Marks `id` active right away and returns where to scroll to. Unknown
    /// ids and sections missing from the DOM are ignored.
    pub fn select(&mut self, id: &str, layout: &impl SectionLayout) -> Option<f64> {
        let index = self.sections.iter().position(|section| section.id == id)?;
        let top = layout.section_top(id)?;
        self.active = index;
        Some(top - self.clearance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECTIONS: &[Section] = &[
        Section { id: "intro", title: "Introduction", icon: Icon::Info },
        Section { id: "data", title: "Data We Collect", icon: Icon::Document },
        Section { id: "rights", title: "Your Rights", icon: Icon::Shield },
    ];

    struct FakeLayout {
        scroll_y: f64,
        tops: HashMap<&'static str, f64>,
    }

    impl FakeLayout {
        fn new(scroll_y: f64, tops: &[(&'static str, f64)]) -> Self {
            Self { scroll_y, tops: tops.iter().copied().collect() }
        }
    }

    impl SectionLayout for FakeLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }
    }

    const TOPS: &[(&str, f64)] = &[("intro", 0.0), ("data", 400.0), ("rights", 900.0)];

    #[test]
    fn starts_on_first_section() {
        let spy = ScrollSpy::new(SECTIONS, 150.0, 100.0);
        assert_eq!(spy.active_id(), "intro");
    }

    #[test]
    fn picks_last_section_scrolled_past() {
        let layout = FakeLayout::new(500.0, TOPS);
        let mut spy = ScrollSpy::new(SECTIONS, 150.0, 100.0);
        assert!(spy.refresh(&layout));
        assert_eq!(spy.active_id(), "data");
    }

    #[test]
    fn before_first_section_falls_back_to_first() {
        let layout = FakeLayout::new(0.0, &[("intro", 300.0), ("data", 700.0), ("rights", 1200.0)]);
        let mut spy = ScrollSpy::new(SECTIONS, 150.0, 100.0);
        spy.refresh(&layout);
        assert_eq!(spy.active_id(), "intro");
        assert_eq!(resolve_active(SECTIONS, &layout, -50.0), 0);
    }

    #[test]
    fn reaching_the_bottom_activates_last_section() {
        let layout = FakeLayout::new(2000.0, TOPS);
        let mut spy = ScrollSpy::new(SECTIONS, 200.0, 80.0);
        spy.refresh(&layout);
        assert_eq!(spy.active_id(), "rights");
        assert!(!spy.refresh(&layout));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout = FakeLayout::new(1000.0, &[("intro", 0.0), ("rights", 900.0)]);
        assert_eq!(resolve_active(SECTIONS, &layout, 1150.0), 2);
        let layout = FakeLayout::new(500.0, &[("intro", 0.0), ("rights", 900.0)]);
        assert_eq!(resolve_active(SECTIONS, &layout, 650.0), 0);
    }

    #[test]
    fn select_activates_immediately_and_returns_target() {
        let layout = FakeLayout::new(0.0, TOPS);
        let mut spy = ScrollSpy::new(SECTIONS, 150.0, 100.0);
        assert_eq!(spy.select("rights", &layout), Some(800.0));
        assert_eq!(spy.active_id(), "rights");
    }

    #[test]
    fn select_ignores_unknown_or_missing_sections() {
        let layout = FakeLayout::new(0.0, &[("intro", 0.0)]);
        let mut spy = ScrollSpy::new(SECTIONS, 150.0, 100.0);
        assert_eq!(spy.select("nope", &layout), None);
        assert_eq!(spy.select("data", &layout), None);
        assert_eq!(spy.active_id(), "intro");
    }
}
