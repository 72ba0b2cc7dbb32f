//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;
mod menu;
pub mod page;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (nav_area, page_area, status_area) = layout::create_layout(area);

    page::draw(frame, page_area, app);
    layout::draw_nav_bar(frame, nav_area, app);

    // Overlays
    if app.state.current_view == View::ContactForm {
        forms::draw_contact_form(frame, page_area, app);
    }
    if app.state.menu_open {
        menu::draw(frame, page_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);
}
