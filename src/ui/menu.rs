//! Section menu overlay

use super::components::{dialog_area, render_dialog_frame};
use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

/// Draw the section menu in the top-right corner of `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let height = Section::ALL.len() as u16 + 2;
    let width = 24;
    let centered = dialog_area(area, width, height);
    let menu_area = Rect {
        x: area.x + area.width.saturating_sub(centered.width + 1),
        y: area.y,
        ..centered
    };

    let inner = render_dialog_frame(frame, menu_area, "Sections", Color::Blue);
    let active = app.state.active_section();

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let marker = if *section == active { "●" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{marker} "), Style::default().fg(Color::Blue)),
                Span::raw(section.label()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.state.menu_selected));
    frame.render_stateful_widget(list, inner, &mut state);
}
