//! PDF text extraction for uploaded résumés.
//!
//! Pages are extracted individually and concatenated in page order. A page that
//! yields no text contributes an empty fragment; only a document that cannot be
//! opened at all is an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Uploaded document is empty")]
    Empty,

    #[error("Could not read PDF: {0}")]
    Unreadable(String),
}

/// Lower-cased résumé text, ready for case-insensitive matching.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

/// Extracts the text of every page of a PDF held in memory.
pub fn extract_resume_text(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Unreadable(e.to_string()))?;

    Ok(join_pages(&pages))
}

/// Concatenates page fragments in order (no separator) and lower-cases the result.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> ExtractedText {
    let text = pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<String>()
        .to_lowercase();

    ExtractedText {
        text,
        page_count: pages.len(),
    }
}
