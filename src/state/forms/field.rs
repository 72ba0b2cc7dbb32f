//! Form field value objects

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            is_multiline: false,
        }
    }

    /// Create a new multi-line text field
    pub fn multiline(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(label, placeholder)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Insert a line break (multi-line fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("Name", "Your name");
        assert!(field.is_empty());
        assert!(!field.is_multiline);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text("Name", "Your name");
        field.push_char('A');
        field.push_char('y');
        assert_eq!(field.as_text(), "Ay");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("Name", "Your name");
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = FormField::text("Subject", "Subject");
        single.push_newline();
        assert!(single.is_empty());

        let mut multi = FormField::multiline("Message", "Your message...");
        multi.push_char('a');
        multi.push_newline();
        multi.push_char('b');
        assert_eq!(multi.as_text(), "a\nb");
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let mut field = FormField::text("Name", "Your name");
        field.push_char(' ');
        assert!(!field.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("Email", "your@email.com");
        field.set_text("a@b.com");
        field.clear();
        assert!(field.is_empty());
    }
}
