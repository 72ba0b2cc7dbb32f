//! Application state definitions

use super::{
    BeginOutcome, ContactForm, Form, PageLayout, ScrollAnimation, ScrollTracker, Section,
    SubmissionOutcome, SubmissionStatus, Submitter, Ticket,
};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Page,
    /// Contact form overlay on top of the page
    ContactForm,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    /// Navigation menu overlay open
    pub menu_open: bool,
    /// Highlighted entry in the navigation menu
    pub menu_selected: usize,
    /// First page row shown in the viewport
    pub scroll_offset: u16,
    /// Rows available to the page body
    pub viewport_height: u16,
    pub scroll_animation: Option<ScrollAnimation>,
    pub page_layout: PageLayout,
    pub tracker: ScrollTracker,
    pub form: ContactForm,
    pub submitter: Submitter,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScrollTracker::default(), Submitter::default())
    }
}

impl AppState {
    pub fn new(tracker: ScrollTracker, submitter: Submitter) -> Self {
        Self {
            current_view: View::Page,
            menu_open: false,
            menu_selected: 0,
            scroll_offset: 0,
            viewport_height: 0,
            scroll_animation: None,
            page_layout: PageLayout::default(),
            tracker,
            form: ContactForm::new(),
            submitter,
        }
    }

    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    pub fn is_scrolled(&self) -> bool {
        self.tracker.is_scrolled()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitter.is_submitting()
    }

    pub fn submission_status(&self) -> &SubmissionStatus {
        self.submitter.status()
    }

    /// Replace the page geometry (after a resize) and re-clamp the scroll offset
    pub fn set_page_layout(&mut self, layout: PageLayout, viewport_height: u16) {
        self.page_layout = layout;
        self.viewport_height = viewport_height;
        self.scroll_to(self.scroll_offset);
    }

    fn max_scroll(&self) -> u16 {
        self.page_layout.max_scroll(self.viewport_height)
    }

    /// Jump to an absolute offset, clamped to the page, and emit a scroll event
    pub fn scroll_to(&mut self, offset: u16) {
        self.scroll_offset = offset.min(self.max_scroll());
        self.on_scroll();
    }

    /// Scroll by `delta` rows (negative scrolls up). Cancels any smooth scroll.
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_animation = None;
        let target = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(target as u16);
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport_height.saturating_sub(1).max(1)));
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport_height.saturating_sub(1).max(1)));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_animation = None;
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_animation = None;
        self.scroll_to(self.max_scroll());
    }

    /// Smoothly scroll to a section and close the navigation menu
    pub fn scroll_to_section(&mut self, section: Section) {
        let target = self.page_layout.start_of(section).min(self.max_scroll());
        self.scroll_animation = Some(ScrollAnimation::new(self.scroll_offset, target));
        self.menu_open = false;
        self.menu_selected = section.index();
    }

    /// Advance the smooth scroll, if any. Returns true while animating.
    pub fn tick_scroll_animation(&mut self) -> bool {
        let Some(animation) = self.scroll_animation.as_ref() else {
            return false;
        };
        let (offset, done) = if animation.is_complete() {
            (animation.target(), true)
        } else {
            (animation.offset(), false)
        };
        self.scroll_to(offset);
        if done {
            self.scroll_animation = None;
        }
        !done
    }

    fn on_scroll(&mut self) {
        let bounds = self.page_layout.bounds_at(self.scroll_offset);
        self.tracker.on_scroll(i32::from(self.scroll_offset), &bounds);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = self.active_section().index();
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % Section::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = self
            .menu_selected
            .checked_sub(1)
            .unwrap_or(Section::ALL.len() - 1);
    }

    pub fn open_contact_form(&mut self) {
        self.menu_open = false;
        self.current_view = View::ContactForm;
    }

    /// Close the overlay. Field contents are kept.
    pub fn close_contact_form(&mut self) {
        self.current_view = View::Page;
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Explicit submit action from the form
    pub fn submit_form(&mut self) -> BeginOutcome {
        self.submitter.begin(&self.form)
    }

    /// Apply a delivery outcome reported by the request task
    pub fn settle_submission(&mut self, ticket: Ticket, outcome: SubmissionOutcome) -> bool {
        self.submitter.settle(ticket, outcome, &mut self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SubmissionError;

    fn state_with_layout() -> AppState {
        let mut state = AppState::new(ScrollTracker::new(4, 1), Submitter::new("me@example.com"));
        let heights: Vec<(Section, u16)> = Section::ALL.iter().map(|s| (*s, 20)).collect();
        state.set_page_layout(PageLayout::from_heights(80, &heights), 20);
        state
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_section_is_home() {
            let state = state_with_layout();
            assert_eq!(state.active_section(), Section::Home);
            assert!(!state.is_scrolled());
        }

        #[test]
        fn test_scroll_by_updates_active_section() {
            let mut state = state_with_layout();
            // Reference row 4 lands in About (rows 20..40) at offset 20
            state.scroll_by(20);
            assert_eq!(state.active_section(), Section::About);
            assert!(state.is_scrolled());
        }

        #[test]
        fn test_scroll_is_clamped() {
            let mut state = state_with_layout();
            state.scroll_by(10_000);
            assert_eq!(state.scroll_offset, 160 - 20);
            state.scroll_by(-10_000);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_scroll_to_bottom_reaches_contact() {
            let mut state = state_with_layout();
            state.scroll_to_bottom();
            assert_eq!(state.active_section(), Section::Contact);
        }

        #[test]
        fn test_scroll_to_section_closes_menu_and_animates() {
            let mut state = state_with_layout();
            state.toggle_menu();
            state.scroll_to_section(Section::Skills);
            assert!(!state.menu_open);
            assert_eq!(
                state.scroll_animation.as_ref().map(|a| a.target()),
                Some(60)
            );
        }

        #[test]
        fn test_manual_scroll_cancels_animation() {
            let mut state = state_with_layout();
            state.scroll_to_section(Section::Contact);
            state.scroll_by(1);
            assert!(state.scroll_animation.is_none());
        }

        #[test]
        fn test_tick_without_animation_is_noop() {
            let mut state = state_with_layout();
            assert!(!state.tick_scroll_animation());
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_shrinking_page_reclamps_offset() {
            let mut state = state_with_layout();
            state.scroll_to_bottom();
            let heights: Vec<(Section, u16)> = Section::ALL.iter().map(|s| (*s, 5)).collect();
            state.set_page_layout(PageLayout::from_heights(120, &heights), 20);
            assert_eq!(state.scroll_offset, 20);
        }
    }

    mod menu {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_selects_active_section() {
            let mut state = state_with_layout();
            state.scroll_by(40);
            state.toggle_menu();
            assert!(state.menu_open);
            assert_eq!(state.menu_selected, Section::Experience.index());
        }

        #[test]
        fn test_menu_navigation_wraps() {
            let mut state = state_with_layout();
            state.menu_prev();
            assert_eq!(state.menu_selected, 7);
            state.menu_next();
            assert_eq!(state.menu_selected, 0);
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_open_and_close_keeps_fields() {
            let mut state = state_with_layout();
            state.open_contact_form();
            assert_eq!(state.current_view, View::ContactForm);
            state.form.input_char('A');
            state.close_contact_form();
            assert_eq!(state.current_view, View::Page);
            assert_eq!(state.form.name.as_text(), "A");
        }

        #[test]
        fn test_submit_and_settle_round() {
            let mut state = state_with_layout();
            state.form = ContactForm::filled("A", "a@b.com", "Hi", "Hello");

            let ticket = match state.submit_form() {
                BeginOutcome::Dispatch { ticket, .. } => ticket,
                other => panic!("expected dispatch, got {other:?}"),
            };
            assert!(state.is_submitting());

            assert!(state.settle_submission(
                ticket,
                Err(SubmissionError::Transport("down".to_string()))
            ));
            assert!(!state.is_submitting());
            assert!(matches!(
                state.submission_status(),
                SubmissionStatus::Error(_)
            ));
            assert!(state.form.is_complete());
        }
    }
}
