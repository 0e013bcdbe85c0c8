// Document generation: formatted DOCX output from tailored resume text.
// Formatting is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod formatter;
pub mod handlers;

use thiserror::Error;

pub use formatter::format_resume;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to package DOCX: {0}")]
    Pack(String),
}
