use crate::error::RfpLensError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Judge the format from the declared filename extension. Content is
    /// never sniffed; a mislabeled file surfaces later as `ExtractionFailed`.
    pub fn from_filename(filename: &str) -> Result<Self, RfpLensError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(RfpLensError::UnsupportedFormat(filename.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

/// An uploaded document before extraction. Discarded once its text has been
/// pulled out; nothing here is retained across requests.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
    pub filename: String,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat, filename: String) -> Self {
        Self {
            bytes,
            format,
            filename,
        }
    }

    /// Build a document from intake input, rejecting unsupported extensions
    /// before any extraction work is attempted.
    pub fn from_filename(bytes: Vec<u8>, filename: &str) -> Result<Self, RfpLensError> {
        let format = DocumentFormat::from_filename(filename)?;
        Ok(Self::new(bytes, format, filename.to_string()))
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Plain text pulled out of a document. Cannot be constructed empty or
/// whitespace-only; that case is `EmptyExtraction` at the construction site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    content: String,
    source_format: DocumentFormat,
    segment_count: usize,
}

impl ExtractedText {
    pub fn new(
        content: String,
        source_format: DocumentFormat,
        segment_count: usize,
    ) -> Result<Self, RfpLensError> {
        if content.trim().is_empty() {
            return Err(RfpLensError::EmptyExtraction);
        }

        Ok(Self {
            content,
            source_format,
            segment_count,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source_format(&self) -> DocumentFormat {
        self.source_format
    }

    /// Pages for PDF, contributing paragraphs for DOCX.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(
            DocumentFormat::from_filename("solicitation.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("RFP-2024.DOCX").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_format_rejects_other_extensions() {
        for name in ["notes.txt", "archive.zip", "solicitation", "solicitation.pdf.exe"] {
            let err = DocumentFormat::from_filename(name).unwrap_err();
            assert!(matches!(err, RfpLensError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[test]
    fn test_raw_document_rejects_before_extraction() {
        let err = RawDocument::from_filename(b"payload".to_vec(), "notes.txt").unwrap_err();
        assert!(matches!(err, RfpLensError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extracted_text_never_empty() {
        let err = ExtractedText::new(String::new(), DocumentFormat::Pdf, 0).unwrap_err();
        assert!(matches!(err, RfpLensError::EmptyExtraction));

        let err = ExtractedText::new("  \n\t ".to_string(), DocumentFormat::Docx, 3).unwrap_err();
        assert!(matches!(err, RfpLensError::EmptyExtraction));

        let text = ExtractedText::new("Scope of work".to_string(), DocumentFormat::Pdf, 1).unwrap();
        assert_eq!(text.content(), "Scope of work");
        assert_eq!(text.segment_count(), 1);
        assert_eq!(text.char_count(), 13);
    }
}
