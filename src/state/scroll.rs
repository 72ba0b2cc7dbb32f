//! Scroll position tracking and smooth scrolling

use super::Section;
use std::time::{Duration, Instant};

/// Reference line distance from the viewport top, in pixels
pub const DEFAULT_REFERENCE_LINE: i32 = 100;
/// Scroll offset past which the navigation bar changes background, in pixels
pub const DEFAULT_SCROLLED_THRESHOLD: i32 = 50;

/// On-screen extent of a section, relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: i32,
    pub bottom: i32,
}

impl SectionBounds {
    pub fn new(section: Section, top: i32, bottom: i32) -> Self {
        Self {
            section,
            top,
            bottom,
        }
    }

    /// Whether the section crosses a horizontal line `line` units below the viewport top
    pub fn crosses(&self, line: i32) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Derives the active section and the "scrolled" flag from scroll events
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    active: Section,
    scrolled: bool,
    reference_line: i32,
    scrolled_threshold: i32,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_LINE, DEFAULT_SCROLLED_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(reference_line: i32, scrolled_threshold: i32) -> Self {
        Self {
            active: Section::default(),
            scrolled: false,
            reference_line,
            scrolled_threshold,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Handle one scroll event.
    ///
    /// `bounds` must be in page order. The first section crossing the reference
    /// line wins; when none does, the previous active section is kept.
    pub fn on_scroll(&mut self, scroll_y: i32, bounds: &[SectionBounds]) -> Section {
        self.scrolled = scroll_y > self.scrolled_threshold;

        if let Some(current) = bounds.iter().find(|b| b.crosses(self.reference_line)) {
            if current.section != self.active {
                tracing::debug!("Active section: {}", current.section.id());
            }
            self.active = current.section;
        }

        self.active
    }
}

/// Eased scroll from one offset to another
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    start_time: Instant,
    from: u16,
    to: u16,
}

impl ScrollAnimation {
    /// Duration of a smooth scroll
    const DURATION: Duration = Duration::from_millis(400);

    pub fn new(from: u16, to: u16) -> Self {
        Self {
            start_time: Instant::now(),
            from,
            to,
        }
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    /// Offset at the current instant
    pub fn offset(&self) -> u16 {
        self.offset_at(self.start_time.elapsed())
    }

    /// Offset after `elapsed` time into the animation
    pub fn offset_at(&self, elapsed: Duration) -> u16 {
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        // Cubic ease-out for smooth deceleration
        let eased = simple_easing::cubic_out(progress);
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * eased).round() as u16
    }

    pub fn is_complete(&self) -> bool {
        self.start_time.elapsed() >= Self::DURATION
    }
}
