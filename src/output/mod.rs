//! Output formatting: plain-text export and console presentation

pub mod formatter;
pub mod text_export;

pub use text_export::{export_warning, resume_to_text};
