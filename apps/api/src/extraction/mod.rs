//! Resume text extraction — turns uploaded file bytes into plain text.
//!
//! Dispatch is by filename suffix only (`.pdf`, `.docx`, `.txt`, case-insensitive).
//! Every failure is an `ExtractError`; callers never inspect the text itself
//! to decide whether extraction succeeded.

pub mod docx;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("Error decoding text file: {0}")]
    Decoding(#[from] std::string::FromUtf8Error),
}

impl ExtractError {
    /// True when the upload itself is at fault (reported back as a 400).
    /// Decoding failures are treated as server faults.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ExtractError::Decoding(_))
    }
}

/// Declared kind of an uploaded resume, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Text,
}

impl FileKind {
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(FileKind::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(FileKind::Docx)
        } else if lower.ends_with(".txt") {
            Ok(FileKind::Text)
        } else {
            Err(ExtractError::UnsupportedFormat)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
            FileKind::Text => "txt",
        }
    }
}

/// Extracts plain text from `bytes` according to the suffix of `filename`.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    match FileKind::from_filename(filename)? {
        FileKind::Pdf => pdf::extract_pdf_text(bytes),
        FileKind::Docx => docx::extract_docx_text(bytes),
        FileKind::Text => Ok(String::from_utf8(bytes.to_vec())?),
    }
}
