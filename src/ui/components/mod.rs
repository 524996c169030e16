//! Reusable UI components.
//!
//! - `status` - Loading spinner and error-with-retry placeholders
//! - `tab_selector` - Horizontal tab line for the list screen

mod status;
mod tab_selector;

pub use status::{render_status, status_lines};
pub use tab_selector::tab_line;
