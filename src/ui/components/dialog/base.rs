//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Rect of a `width` x `height` dialog centered in `area`, shrunk to fit
pub fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Clear `area`, draw a bordered dialog box in it, and return the inner area
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> Rect {
    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Wrap text to fit within a maximum width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width + word_width + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wrapping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_text_is_one_line() {
            assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
        }

        #[test]
        fn test_wraps_at_word_boundary() {
            assert_eq!(
                wrap_text("the quick brown fox", 10),
                vec!["the quick", "brown fox"]
            );
        }

        #[test]
        fn test_long_word_gets_its_own_line() {
            assert_eq!(
                wrap_text("a polypropylene b", 5),
                vec!["a", "polypropylene", "b"]
            );
        }

        #[test]
        fn test_preserves_explicit_newlines() {
            assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
        }

        #[test]
        fn test_empty_text_yields_one_empty_line() {
            assert_eq!(wrap_text("", 20), vec![String::new()]);
        }

        #[test]
        fn test_counts_chars_not_bytes() {
            assert_eq!(wrap_text("née née", 7), vec!["née née"]);
        }
    }

    mod area {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_centered() {
            let area = dialog_area(Rect::new(0, 0, 80, 24), 40, 10);
            assert_eq!(area, Rect::new(20, 7, 40, 10));
        }

        #[test]
        fn test_shrinks_to_fit() {
            let area = dialog_area(Rect::new(0, 0, 30, 8), 40, 10);
            assert_eq!(area, Rect::new(0, 0, 30, 8));
        }
    }
}
