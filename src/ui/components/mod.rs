//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, ButtonState, BUTTON_HEIGHT};
pub use dialog::{dialog_area, render_dialog_frame, wrap_text};
