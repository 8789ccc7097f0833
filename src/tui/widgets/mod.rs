//! Reusable TUI widgets.

pub mod form;
pub mod summary;

pub use form::{Control, ERROR_PREFIX, FORM_HEIGHT, FocusRing, draw_form};
pub use summary::{MESSAGE_LABEL, SUMMARY_HEIGHT, draw_summary, summary_lines};
