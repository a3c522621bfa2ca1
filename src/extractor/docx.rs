use crate::error::RfpLensError;
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

/// Extract paragraph text in document order, joined with a newline between
/// paragraphs. Paragraph boundaries are the only structural signal retained;
/// tables, headers, and images are dropped.
pub(crate) fn extract_paragraphs(bytes: &[u8]) -> Result<(String, usize), RfpLensError> {
    let docx = read_docx(bytes)
        .map_err(|e| RfpLensError::ExtractionFailed(format!("could not open DOCX: {e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph_text(paragraph);
            // Blank paragraphs (section breaks, spacing) carry no signal.
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    let segment_count = paragraphs.len();
    Ok((paragraphs.join("\n"), segment_count))
}

/// Runs within a paragraph are fragments of the same sentence, so they are
/// concatenated with no separator.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(text) = run_child {
                    parts.push(&text.text);
                }
            }
        }
    }

    parts.concat()
}
