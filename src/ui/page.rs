//! Page body: every section rendered as one tall column of lines

use super::components::wrap_text;
use crate::app::App;
use crate::content::{Card, Profile};
use crate::state::{PageLayout, Section};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Left margin of the page body
const MARGIN: usize = 2;

const ACCENT: Color = Color::Blue;

/// Fully laid-out page at one width
pub struct RenderedPage {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

/// Accumulates the lines of one section
struct SectionWriter {
    width: usize,
    lines: Vec<Line<'static>>,
}

impl SectionWriter {
    fn new(width: u16) -> Self {
        Self {
            width: (width as usize).saturating_sub(MARGIN * 2).max(10),
            lines: Vec::new(),
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(" ".repeat(MARGIN))];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Word-wrapped text, each continuation line indented by `indent`
    fn wrapped(&mut self, text: &str, style: Style, prefix: &str, indent: usize) {
        let available = self.width.saturating_sub(indent);
        for (i, line) in wrap_text(text, available).into_iter().enumerate() {
            let lead = if i == 0 {
                format!("{prefix:<indent$}")
            } else {
                " ".repeat(indent)
            };
            self.push(vec![
                Span::styled(lead, Style::default().fg(ACCENT)),
                Span::styled(line, style),
            ]);
        }
    }

    fn paragraph(&mut self, text: &str) {
        self.wrapped(text, Style::default().fg(Color::Gray), "", 0);
    }

    fn bullet(&mut self, text: &str) {
        self.wrapped(text, Style::default().fg(Color::Gray), "›", 2);
    }

    fn heading(&mut self, kicker: &str, title: &str, tagline: Option<&str>) {
        self.push(vec![Span::styled(
            kicker.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )]);
        self.push(vec![Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]);
        if let Some(tagline) = tagline {
            self.wrapped(tagline, Style::default().fg(Color::DarkGray), "", 0);
        }
        self.blank();
    }

    fn subheading(&mut self, text: &str) {
        self.push(vec![Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]);
    }

    fn card(&mut self, card: &Card) {
        self.push(vec![
            Span::styled(format!("{} ", card.icon), Style::default().fg(ACCENT)),
            Span::styled(
                card.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        self.wrapped(card.desc, Style::default().fg(Color::Gray), "", 2);
    }

    /// Tags laid out left to right, wrapping to the next row when full
    fn tags(&mut self, tags: &[&str]) {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for tag in tags {
            let chip = format!("[{tag}]");
            let chip_width = chip.chars().count() + 1;
            if used + chip_width > self.width && !row.is_empty() {
                self.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(Span::styled(chip, Style::default().fg(Color::Cyan)));
            row.push(Span::raw(" "));
            used += chip_width;
        }
        if !row.is_empty() {
            self.push(row);
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.blank();
        self.lines
    }
}

/// Lay out the whole page at `width`
pub fn build_page(profile: &Profile, width: u16) -> RenderedPage {
    let mut lines = Vec::new();
    let mut heights = Vec::with_capacity(Section::ALL.len());

    for section in Section::ALL {
        let section_lines = build_section(profile, section, width);
        heights.push((section, section_lines.len() as u16));
        lines.extend(section_lines);
    }

    lines.push(Line::from(Span::styled(
        format!("{}{}", " ".repeat(MARGIN), profile.footer),
        Style::default().fg(Color::DarkGray),
    )));

    RenderedPage {
        lines,
        layout: PageLayout::from_heights(width, &heights),
    }
}

fn build_section(profile: &Profile, section: Section, width: u16) -> Vec<Line<'static>> {
    let mut w = SectionWriter::new(width);
    w.blank();
    if let Some(heading) = profile.heading(section) {
        w.heading(heading.kicker, heading.title, heading.tagline);
    }

    match section {
        Section::Home => {
            w.push(vec![Span::styled(
                profile.headline.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )]);
            w.push(vec![
                Span::raw("I'm "),
                Span::styled(
                    profile.name.to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ]);
            w.subheading(profile.roles);
            w.push(vec![Span::styled(
                profile.employer.to_string(),
                Style::default().fg(Color::DarkGray),
            )]);
            w.blank();
            w.paragraph(profile.summary);
            w.blank();
            w.push(vec![
                Span::styled("[e] View Experience", Style::default().fg(Color::Cyan)),
                Span::raw("   "),
                Span::styled(
                    format!("[r] Resume: {}", profile.resume_url),
                    Style::default().fg(Color::Gray),
                ),
            ]);
            w.blank();
            for contact in profile.contacts {
                w.push(vec![
                    Span::styled(
                        format!("{:<10}", contact.label),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(contact.link.to_string()),
                ]);
            }
        }
        Section::About => {
            w.subheading(profile.about_title);
            for paragraph in profile.about {
                w.paragraph(paragraph);
                w.blank();
            }
            for card in profile.highlights {
                w.card(card);
            }
        }
        Section::Experience => {
            for job in profile.jobs {
                if job.is_current() {
                    w.push(vec![Span::styled(
                        "Current Position",
                        Style::default().fg(Color::Green),
                    )]);
                }
                w.subheading(job.title);
                w.push(vec![Span::styled(
                    job.company.to_string(),
                    Style::default().fg(ACCENT),
                )]);
                w.push(vec![Span::styled(
                    job.tenure.label(),
                    Style::default().fg(Color::DarkGray),
                )]);
                for point in job.points {
                    w.bullet(point);
                }
                w.tags(job.tags);
                w.blank();
            }
            w.subheading("Key Achievements");
            for card in profile.achievements {
                w.card(card);
            }
        }
        Section::Skills => {
            for group in profile.skills {
                w.subheading(group.title);
                for skill in group.skills {
                    w.bullet(skill);
                }
                w.blank();
            }
            w.card(&profile.specialty);
        }
        Section::Projects => {
            let project = &profile.project;
            w.subheading(project.title);
            w.push(vec![Span::styled(
                project.period.to_string(),
                Style::default().fg(Color::DarkGray),
            )]);
            w.blank();
            w.paragraph(project.summary);
            w.blank();
            for phase in project.phases {
                w.card(phase);
            }
            w.blank();
            w.tags(project.tags);
        }
        Section::Education => {
            for edu in profile.education {
                let marker = if edu.completed { "●" } else { "○" };
                w.push(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(ACCENT)),
                    Span::styled(
                        edu.title.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]);
                if edu.completed {
                    w.push(vec![Span::styled(
                        "  Completed",
                        Style::default().fg(Color::Green),
                    )]);
                }
                w.wrapped(edu.board, Style::default().fg(ACCENT), "", 2);
                w.wrapped(edu.school, Style::default().fg(Color::Gray), "", 2);
                w.wrapped(edu.location, Style::default().fg(Color::Gray), "", 2);
                let mut details = edu.years.to_string();
                if let Some(grade) = edu.grade {
                    details.push_str(&format!("  ·  {grade}"));
                }
                w.wrapped(&details, Style::default().fg(Color::DarkGray), "", 2);
                w.blank();
            }
        }
        Section::Interests => {
            w.subheading("Professional Interests");
            for card in profile.professional_interests {
                w.card(card);
            }
            w.blank();
            w.subheading("Personal Hobbies");
            for card in profile.hobbies {
                w.card(card);
            }
        }
        Section::Contact => {
            w.subheading("Contact Information");
            w.paragraph(profile.contact_blurb);
            w.blank();
            for contact in profile.contacts {
                w.push(vec![
                    Span::styled(
                        format!("{:<10}", contact.label),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(contact.value.to_string()),
                ]);
            }
            w.push(vec![
                Span::styled(format!("{:<10}", "Location"), Style::default().fg(Color::DarkGray)),
                Span::raw(profile.location.to_string()),
            ]);
            w.blank();
            w.push(vec![
                Span::styled(
                    "[c] Send a Message",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("[y] Copy email", Style::default().fg(Color::Gray)),
            ]);
        }
    }

    w.finish()
}

/// Draw the visible slice of the page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let visible: Vec<Line> = app
        .page
        .lines
        .iter()
        .skip(app.state.scroll_offset as usize)
        .take(area.height as usize)
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROFILE;
    use pretty_assertions::assert_eq;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_layout_covers_every_section_in_order() {
        let page = build_page(&PROFILE, 80);
        let sections: Vec<Section> = page.layout.spans.iter().map(|s| s.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
        assert!(page.layout.spans.iter().all(|s| s.height > 0));
    }

    #[test]
    fn test_layout_matches_line_count() {
        let page = build_page(&PROFILE, 80);
        // Footer line follows the last section
        assert_eq!(page.lines.len(), page.layout.total_height() as usize + 1);
    }

    #[test]
    fn test_section_starts_at_its_heading() {
        let page = build_page(&PROFILE, 80);
        let start = page.layout.start_of(Section::Skills) as usize;
        // Blank spacer, then the kicker
        assert_eq!(line_text(&page.lines[start + 1]).trim(), "MY SKILLS");
    }

    #[test]
    fn test_narrow_page_is_taller() {
        let wide = build_page(&PROFILE, 120);
        let narrow = build_page(&PROFILE, 40);
        assert!(narrow.layout.total_height() > wide.layout.total_height());
    }

    #[test]
    fn test_lines_fit_width() {
        let width = 80;
        let page = build_page(&PROFILE, width);
        for line in &page.lines {
            let text = line_text(line);
            assert!(
                text.chars().count() <= width as usize,
                "line too wide: {text:?}"
            );
        }
    }

    #[test]
    fn test_experience_shows_tenure() {
        let page = build_page(&PROFILE, 100);
        let all: Vec<String> = page.lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.contains("September 2023 - Present")));
        assert!(all
            .iter()
            .any(|l| l.contains("September 2023 - September 2024 (1 Year)")));
    }
}
