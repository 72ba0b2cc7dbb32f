//! Application state module

mod app_state;
mod forms;
mod page_layout;
mod scroll;
mod section;
mod submission;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use page_layout::*;
pub use scroll::*;
pub use section::*;
pub use submission::*;
pub use ui_area::*;
