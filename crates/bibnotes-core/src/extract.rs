//! Text extraction from attached documents

use std::path::Path;

use tracing::debug;

use crate::error::{BibnotesError, Result};

/// Converts an attached file into plain text
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Extractor backed by the `pdf-extract` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    fn extract_text(&self, path: &Path) -> Result<String> {
        let text =
            pdf_extract::extract_text(path).map_err(|e| BibnotesError::extraction(path, e))?;
        debug!(chars = text.len(), "extracted text");
        Ok(text)
    }
}
