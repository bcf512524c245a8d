mod definitions;
mod document;
mod file_note;
pub mod views;

pub use definitions::{AdvisoryNotes, ADVISORY_NOTES};
pub use document::{render_report, report_file_name, wrap_text_to_lines, ReportExport};
pub use file_note::file_note;
