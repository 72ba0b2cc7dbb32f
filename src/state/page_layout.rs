//! Row geometry of the rendered page

use super::{Section, SectionBounds};

/// Rows occupied by one section in the full (unscrolled) page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub start: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn end(&self) -> u16 {
        self.start.saturating_add(self.height)
    }
}

/// Where each section sits on the page at a given render width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Build a layout from per-section heights given in page order
    pub fn from_heights(width: u16, heights: &[(Section, u16)]) -> Self {
        let mut start = 0u16;
        let spans = heights
            .iter()
            .map(|(section, height)| {
                let span = SectionSpan {
                    section: *section,
                    start,
                    height: *height,
                };
                start = start.saturating_add(*height);
                span
            })
            .collect();
        Self { width, spans }
    }

    pub fn total_height(&self) -> u16 {
        self.spans.last().map(SectionSpan::end).unwrap_or(0)
    }

    /// Largest scroll offset that still fills a viewport `viewport_height` rows tall
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height().saturating_sub(viewport_height)
    }

    /// First row of `section`, or 0 when it is not on the page
    pub fn start_of(&self, section: Section) -> u16 {
        self.spans
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.start)
            .unwrap_or(0)
    }

    /// Section extents relative to the viewport top when scrolled to `scroll`
    pub fn bounds_at(&self, scroll: u16) -> Vec<SectionBounds> {
        let scroll = i32::from(scroll);
        self.spans
            .iter()
            .map(|s| {
                SectionBounds::new(
                    s.section,
                    i32::from(s.start) - scroll,
                    i32::from(s.end()) - scroll,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout() -> PageLayout {
        PageLayout::from_heights(
            80,
            &[
                (Section::Home, 10),
                (Section::About, 20),
                (Section::Experience, 30),
            ],
        )
    }

    #[test]
    fn test_spans_are_contiguous() {
        let layout = layout();
        assert_eq!(layout.start_of(Section::Home), 0);
        assert_eq!(layout.start_of(Section::About), 10);
        assert_eq!(layout.start_of(Section::Experience), 30);
        assert_eq!(layout.total_height(), 60);
    }

    #[test]
    fn test_missing_section_starts_at_top() {
        assert_eq!(layout().start_of(Section::Contact), 0);
    }

    #[test]
    fn test_max_scroll() {
        let layout = layout();
        assert_eq!(layout.max_scroll(20), 40);
        assert_eq!(layout.max_scroll(100), 0);
    }

    #[test]
    fn test_bounds_at_scroll() {
        let bounds = layout().bounds_at(15);
        assert_eq!(bounds[0], SectionBounds::new(Section::Home, -15, -5));
        assert_eq!(bounds[1], SectionBounds::new(Section::About, -5, 15));
        assert_eq!(bounds[2], SectionBounds::new(Section::Experience, 15, 45));
    }

    #[test]
    fn test_empty_layout() {
        let layout = PageLayout::default();
        assert_eq!(layout.total_height(), 0);
        assert!(layout.bounds_at(0).is_empty());
    }
}
