//! Dialog components for TUI

mod base;

pub use base::{dialog_area, render_dialog_frame, wrap_text};
