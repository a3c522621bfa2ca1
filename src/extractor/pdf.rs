use crate::error::RfpLensError;
use lopdf::Document;

/// Extract text page by page, in page order, and concatenate. A page whose
/// extraction fails contributes an empty segment rather than aborting the
/// document: a partly scanned solicitation still yields its digital pages.
pub(crate) fn extract_pages(bytes: &[u8]) -> Result<(String, usize), RfpLensError> {
    let document = Document::load_mem(bytes)
        .map_err(|e| RfpLensError::ExtractionFailed(format!("could not open PDF: {e}")))?;

    // BTreeMap keyed by page number, so iteration is page order.
    let pages = document.get_pages();
    let page_count = pages.len();
    let mut content = String::new();

    for &page_number in pages.keys() {
        match document.extract_text(&[page_number]) {
            Ok(text) => content.push_str(&text),
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "page yielded no text");
            }
        }
    }

    Ok((content, page_count))
}
