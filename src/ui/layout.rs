//! Layout components (navigation bar, status bar)

use crate::app::App;
use crate::state::{Section, View, NAV_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Gap between navigation labels
const NAV_GAP: u16 = 2;

/// Create the main layout: navigation bar, page body, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_BAR_HEIGHT),    // Navigation bar
            Constraint::Min(0),                    // Page body
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Column span `[start, end)` of every navigation label, in page order
pub fn nav_item_columns(brand: &str) -> Vec<(Section, u16, u16)> {
    // Border + space + brand + gap
    let mut x = 2 + brand.chars().count() as u16 + NAV_GAP * 2;
    Section::ALL
        .iter()
        .map(|section| {
            let width = section.label().len() as u16;
            let span = (*section, x, x + width);
            x += width + NAV_GAP;
            span
        })
        .collect()
}

/// Section whose navigation label covers `column`
pub fn nav_item_at(brand: &str, column: u16) -> Option<Section> {
    nav_item_columns(brand)
        .into_iter()
        .find(|(_, start, end)| (*start..*end).contains(&column))
        .map(|(section, _, _)| section)
}

/// Draw the navigation bar with the active section highlighted
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.state.active_section();
    let brand = app.profile.name;

    // Solid background once the page has scrolled
    let (block_style, border_color) = if app.state.is_scrolled() {
        (Style::default().bg(Color::Black), Color::DarkGray)
    } else {
        (Style::default(), Color::Reset)
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            brand.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(NAV_GAP as usize * 2)),
    ];

    for section in Section::ALL {
        let style = if section == active {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(section.label(), style));
        spans.push(Span::raw(" ".repeat(NAV_GAP as usize)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(block_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission indicator
    if app.state.is_submitting() {
        spans.push(Span::styled(" ◌ ", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    }

    // View-specific hints
    let hints = get_view_hints(app.state.current_view, app.state.menu_open);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Active section on the right
    let section_hint = format!(" #{} ", app.state.active_section().id());

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let hint_width = section_hint.len() as u16;
    let hint_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        y: area.y,
        width: hint_width.min(area.width),
        height: 1,
    };
    let hint_widget =
        Paragraph::new(section_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Blue));
    frame.render_widget(hint_widget, hint_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, menu_open: bool) -> String {
    if menu_open {
        return "j/k:nav  Enter:go  1-8:jump  Esc/m:close".to_string();
    }
    match view {
        View::Page => {
            "j/k:scroll  1-8/m:sections  e:experience  c:contact  y:email  r:resume  q:quit"
                .to_string()
        }
        View::ContactForm => "Tab:next  ^S:send  Enter:newline/send  Esc:close".to_string(),
    }
}
