//! Bordered push button drawn inside dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a button occupies, borders included
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button should look this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Cannot be pressed, e.g. while a message is being sent
    Disabled,
    /// Has keyboard focus; Enter presses it
    Focused,
    Idle,
}

impl ButtonState {
    pub fn new(focused: bool, enabled: bool) -> Self {
        match (enabled, focused) {
            (false, _) => Self::Disabled,
            (true, true) => Self::Focused,
            (true, false) => Self::Idle,
        }
    }

    fn border_style(self) -> Style {
        match self {
            Self::Disabled => Style::default().fg(Color::DarkGray),
            Self::Focused => Style::default().fg(Color::Cyan),
            Self::Idle => Style::default().fg(Color::Gray),
        }
    }

    fn label_style(self) -> Style {
        match self {
            Self::Disabled => Style::default().fg(Color::DarkGray),
            Self::Focused => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Self::Idle => Style::default(),
        }
    }
}

/// Draw `label` centered in a bordered box
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.border_style());
    let paragraph = Paragraph::new(label.to_string())
        .style(state.label_style())
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
