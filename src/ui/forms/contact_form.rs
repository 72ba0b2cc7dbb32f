//! Contact form overlay

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::SubmissionStatus;
use crate::ui::components::{
    dialog_area, render_button, render_dialog_frame, wrap_text, ButtonState, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 26;

/// Color of the status line for each kind of outcome
fn status_color(status: &SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Info(_) => Color::Blue,
        SubmissionStatus::Success(_) => Color::Green,
        SubmissionStatus::Error(_) | SubmissionStatus::None => Color::Red,
    }
}

/// Label of the send button
fn send_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Sending..."
    } else {
        "Send Message"
    }
}

/// Draw the contact form on top of the page
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let dialog = dialog_area(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    let inner = render_dialog_frame(frame, dialog, "Send Me a Message", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Subject
            Constraint::Min(4),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Length(2),             // Status
            Constraint::Length(1),             // Help
        ])
        .horizontal_margin(1)
        .split(inner);

    let form = &app.state.form;
    let locked = app.state.is_submitting();

    for (index, field) in form.fields().into_iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            form.active_field_index == index,
            locked,
        );
    }

    // Center the button in its row
    let button_row = chunks[4];
    let button_width = 20.min(button_row.width);
    let button_area = Rect {
        x: button_row.x + (button_row.width - button_width) / 2,
        width: button_width,
        ..button_row
    };
    let button_state = ButtonState::new(form.is_send_button_active(), !locked);
    render_button(frame, button_area, send_label(locked), button_state);

    let status = app.state.submission_status();
    if let Some(message) = status.message() {
        let lines: Vec<Line> = wrap_text(message, chunks[5].width as usize)
            .into_iter()
            .map(Line::from)
            .collect();
        let paragraph = Paragraph::new(lines).style(Style::default().fg(status_color(status)));
        frame.render_widget(paragraph, chunks[5]);
    }

    draw_help_text(
        frame,
        chunks[6],
        &format!("Tab/Shift+Tab: move  {SEND_SHORTCUT}: send  Esc: close"),
    );
}
