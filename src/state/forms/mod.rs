//! Form domain layer
//!
//! Type-safe handling of the contact form's fields and focus.

mod contact_form;
mod field;

pub use contact_form::{ContactForm, ContactMessage, Form, FormFocus};
pub use field::FormField;
