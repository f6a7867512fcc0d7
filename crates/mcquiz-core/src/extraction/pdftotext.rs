use crate::error::QuizError;
use crate::extraction::{PageText, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// Native text-layer extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so option columns keep their visual order.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, QuizError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| QuizError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| QuizError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QuizError::PdftotextNotFound
                } else {
                    QuizError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(QuizError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages. pdftotext terminates every page with
/// a form feed, so the final one is stripped before splitting to avoid a
/// phantom empty page at the end. Blank pages are kept: they are the OCR
/// fallback candidates.
fn split_pages(text: &str) -> Vec<PageText> {
    let body = text.strip_suffix('\x0c').unwrap_or(text);
    body.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageText {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_numbers_from_one() {
        let pages = split_pages("first page\x0csecond page\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].text, "first page");
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "second page");
    }

    #[test]
    fn test_split_pages_keeps_blank_pages() {
        let pages = split_pages("text\x0c\x0cmore text\x0c");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "");
        assert_eq!(pages[2].text, "more text");
    }

    #[test]
    fn test_split_pages_without_trailing_form_feed() {
        let pages = split_pages("only page");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "only page");
    }
}
