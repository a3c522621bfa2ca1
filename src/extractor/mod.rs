// Extractor module - converts declared-format document bytes into plain text

pub mod docx;
pub mod pdf;

use crate::error::RfpLensError;
use crate::models::{DocumentFormat, ExtractedText, RawDocument};

/// Pure, synchronous bytes-to-text conversion. No network, no external
/// services; deterministic for a given byte stream and parser version.
#[derive(Debug, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, RfpLensError> {
        let (content, segment_count) = match format {
            DocumentFormat::Pdf => pdf::extract_pages(bytes)?,
            DocumentFormat::Docx => docx::extract_paragraphs(bytes)?,
        };

        tracing::debug!(
            format = format.as_str(),
            segments = segment_count,
            chars = content.chars().count(),
            "extraction complete"
        );

        ExtractedText::new(content, format, segment_count)
    }

    pub fn extract_document(&self, document: &RawDocument) -> Result<ExtractedText, RfpLensError> {
        self.extract(&document.bytes, document.format)
    }
}
