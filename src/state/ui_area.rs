//! Screen areas for mouse event handling
//!
//! ```text
//! Row 0-2:  Navigation bar (3 rows with borders)
//! Row 3+:   Page body
//! Bottom:   Status bar (1 row)
//! ```

/// Height of the navigation bar (with borders: top + content + bottom)
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// UI area for calculating mouse Y offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Navigation bar (rows 0-2)
    NavBar,
    /// Scrolled page body (starts after the navigation bar)
    Page,
}

impl UiArea {
    /// Check if a mouse row falls inside this area
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        match self {
            UiArea::NavBar => mouse_row < NAV_BAR_HEIGHT,
            UiArea::Page => mouse_row >= NAV_BAR_HEIGHT,
        }
    }

    /// Rows left for the page body on a terminal `terminal_height` rows tall
    #[inline]
    pub fn page_viewport_height(terminal_height: u16) -> u16 {
        terminal_height.saturating_sub(NAV_BAR_HEIGHT + STATUS_BAR_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_row() {
        assert!(UiArea::NavBar.contains_row(0));
        assert!(UiArea::NavBar.contains_row(2));
        assert!(!UiArea::NavBar.contains_row(3));

        assert!(!UiArea::Page.contains_row(2));
        assert!(UiArea::Page.contains_row(3));
        assert!(UiArea::Page.contains_row(40));
    }

    #[test]
    fn test_page_viewport_height() {
        assert_eq!(UiArea::page_viewport_height(24), 20);
        assert_eq!(UiArea::page_viewport_height(2), 0);
    }
}
