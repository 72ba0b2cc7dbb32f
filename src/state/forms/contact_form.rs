//! Contact form state and payload

use super::field::FormField;
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
}

/// What currently has keyboard focus inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(usize),
    SendButton,
}

/// Payload sent to the message-delivery endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The four user-editable fields of the contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Index of the Send button row
    pub const SEND_BUTTON_INDEX: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::text("Name", "Your name"),
            email: FormField::text("Email", "your@email.com"),
            subject: FormField::text("Subject", "Subject"),
            message: FormField::multiline("Message", "Your message..."),
            active_field_index: 0,
        }
    }

    /// Build a form with every field filled in
    #[cfg(test)]
    pub fn filled(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let mut form = Self::new();
        form.name.set_text(name);
        form.email.set_text(email);
        form.subject.set_text(subject);
        form.message.set_text(message);
        form
    }

    pub fn focus(&self) -> FormFocus {
        if self.active_field_index >= Self::SEND_BUTTON_INDEX {
            FormFocus::SendButton
        } else {
            FormFocus::Field(self.active_field_index)
        }
    }

    /// Returns true if the Send button row is currently active
    pub fn is_send_button_active(&self) -> bool {
        self.focus() == FormFocus::SendButton
    }

    /// True when none of the four fields is empty
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.is_empty())
    }

    /// The four fields in display order
    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.email, &self.subject, &self.message]
    }

    /// Mutable access to the focused field, if a field (not the button) has focus
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.get_field_mut(index)
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    pub fn newline(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.push_newline();
        }
    }

    /// Snapshot the fields into the wire payload
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            subject: self.subject.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    /// Reset all four fields to empty. Focus is left where it is.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, send button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SEND_BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            // Index 4 is the Send button row, no FormField for it
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.subject),
            3 => Some(&mut self.message),
            _ => None,
        }
    }
}
