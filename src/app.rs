//! Application state and core logic

use crate::config::PortfolioConfig;
use crate::content::{Profile, PROFILE};
use crate::mailer::{deliver, HttpMailer, MessageSender};
use crate::platform::{CLIPBOARD_NAME, SEND_MODIFIER};
use crate::state::{
    AppState, BeginOutcome, Form, FormFocus, ScrollTracker, Section, SubmissionOutcome, Submitter,
    Ticket, UiArea, View,
};
use crate::ui::layout::nav_item_at;
use crate::ui::page::{build_page, RenderedPage};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Static page content
    pub profile: &'static Profile,
    /// Page laid out at the current terminal width
    pub page: RenderedPage,
    /// Delivers contact messages
    sender: Arc<dyn MessageSender>,
    request_timeout: Duration,
    /// Outcomes reported back by submission tasks
    outcome_tx: mpsc::UnboundedSender<(Ticket, SubmissionOutcome)>,
    outcome_rx: mpsc::UnboundedReceiver<(Ticket, SubmissionOutcome)>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Section to jump to once the page has been laid out
    start_section: Option<Section>,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &PortfolioConfig) -> Result<Self> {
        let mailer = HttpMailer::new(config.endpoint())?;
        tracing::info!("Contact form posts to {}", mailer.endpoint());

        let state = AppState::new(
            ScrollTracker::new(config.reference_row(), config.scrolled_row()),
            Submitter::new(config.fallback_email_or(PROFILE.email)),
        );

        let mut app = Self::with_sender(state, Arc::new(mailer), config.request_timeout());
        app.start_section = config.start_section;
        Ok(app)
    }

    /// Create an App around an existing state and message sender
    pub fn with_sender(
        state: AppState,
        sender: Arc<dyn MessageSender>,
        request_timeout: Duration,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state,
            profile: &PROFILE,
            page: RenderedPage {
                lines: Vec::new(),
                layout: Default::default(),
            },
            sender,
            request_timeout,
            outcome_tx,
            outcome_rx,
            quit: false,
            copy_message: None,
            terminal_size: None,
            start_section: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-lay out the page when the terminal size changes
    pub fn sync_layout(&mut self, width: u16, height: u16) {
        if self.terminal_size == Some((height, width)) {
            return;
        }
        self.terminal_size = Some((height, width));

        if self.page.lines.is_empty() || self.page.layout.width != width {
            self.page = build_page(self.profile, width);
        }
        self.state.set_page_layout(
            self.page.layout.clone(),
            UiArea::page_viewport_height(height),
        );

        if let Some(section) = self.start_section.take() {
            let offset = self.state.page_layout.start_of(section);
            self.state.scroll_to(offset);
        }
    }

    /// True while a smooth scroll is running
    pub fn is_animating(&self) -> bool {
        self.state.scroll_animation.is_some()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;

        if self.state.current_view == View::ContactForm {
            self.handle_form_key(key);
        } else if self.state.menu_open {
            self.handle_menu_key(key);
        } else {
            self.handle_page_key(key);
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll_page_down(),
            KeyCode::PageUp => self.state.scroll_page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.state.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.state.scroll_to_bottom(),
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char('e') => self.state.scroll_to_section(Section::Experience),
            KeyCode::Char('c') => self.state.open_contact_form(),
            KeyCode::Enter if self.state.active_section() == Section::Contact => {
                self.state.open_contact_form()
            }
            KeyCode::Char('y') => self.copy_contact_email(),
            KeyCode::Char('r') => self.copy_resume_url(),
            KeyCode::Char(c) => self.jump_to_numbered_section(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc | KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char('j') | KeyCode::Down => self.state.menu_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.menu_prev(),
            KeyCode::Enter => {
                if let Some(section) = Section::from_index(self.state.menu_selected) {
                    self.state.scroll_to_section(section);
                }
            }
            KeyCode::Char(c) => self.jump_to_numbered_section(c),
            _ => {}
        }
    }

    /// Keys `1`-`8` jump to the matching section
    fn jump_to_numbered_section(&mut self, c: char) {
        let section = c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Section::from_index);
        if let Some(section) = section {
            self.state.scroll_to_section(section);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let locked = self.state.is_submitting();

        match key.code {
            KeyCode::Esc => self.state.close_contact_form(),
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Char('s') if key.modifiers.contains(SEND_MODIFIER) => self.submit_contact(),
            KeyCode::Enter => match self.state.form.focus() {
                FormFocus::SendButton => self.submit_contact(),
                FormFocus::Field(_) if locked => {}
                FormFocus::Field(index) => {
                    let multiline = self
                        .state
                        .form
                        .get_field(index)
                        .is_some_and(|f| f.is_multiline);
                    if multiline {
                        self.state.form.newline();
                    } else {
                        self.state.next_form_field();
                    }
                }
            },
            KeyCode::Char(_) if locked => {}
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace if !locked => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Validate the form and, if complete, send it from a background task
    pub fn submit_contact(&mut self) {
        let BeginOutcome::Dispatch { ticket, message } = self.state.submit_form() else {
            return;
        };

        let sender = Arc::clone(&self.sender);
        let tx = self.outcome_tx.clone();
        let deadline = self.request_timeout;
        tokio::spawn(async move {
            let outcome = deliver(sender.as_ref(), &message, deadline).await;
            if tx.send((ticket, outcome)).is_err() {
                tracing::debug!("App closed before submission {ticket} settled");
            }
        });
    }

    /// Apply every submission outcome reported since the last call
    pub fn drain_submission_outcomes(&mut self) {
        while let Ok((ticket, outcome)) = self.outcome_rx.try_recv() {
            self.state.settle_submission(ticket, outcome);
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.current_view == View::ContactForm {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollUp if UiArea::Page.contains_row(mouse.row) => {
                self.state.scroll_by(-WHEEL_STEP)
            }
            MouseEventKind::ScrollDown if UiArea::Page.contains_row(mouse.row) => {
                self.state.scroll_by(WHEEL_STEP)
            }
            MouseEventKind::Down(MouseButton::Left) if UiArea::NavBar.contains_row(mouse.row) => {
                if let Some(section) = nav_item_at(self.profile.name, mouse.column) {
                    self.state.scroll_to_section(section);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn copy_contact_email(&mut self) {
        let email = self.profile.email;
        self.copy_with_feedback(email, "email");
    }

    fn copy_resume_url(&mut self) {
        let url = self.profile.resume_url;
        self.copy_with_feedback(url, "resume link");
    }

    fn copy_with_feedback(&mut self, text: &str, what: &str) {
        self.copy_message = Some(match self.copy_to_clipboard(text) {
            Ok(()) => format!("Copied {what} to {CLIPBOARD_NAME}"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                format!("Copy failed: {e}")
            }
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
