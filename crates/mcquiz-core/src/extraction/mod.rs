pub mod ocr;
pub mod pdftotext;

use crate::error::QuizError;
use serde::{Deserialize, Serialize};

/// Text content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageText {
    pub page_number: usize,
    pub text: String,
}

/// Trait for native text-layer extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageText per page.
    /// Pages without a text layer must still be returned (with empty text);
    /// they are the OCR fallback candidates.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageText>, QuizError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for OCR backends, consulted for pages whose text layer is blank.
pub trait OcrEngine: Send + Sync {
    /// Recognize the text of a single page (1-based).
    fn recognize_page(&self, pdf_bytes: &[u8], page_number: usize) -> Result<String, QuizError>;

    /// Name of this OCR engine (for diagnostics).
    fn engine_name(&self) -> &str;
}

/// How a page's text was recovered, or why it was not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOutcome {
    /// The native text layer was non-blank; OCR was never consulted.
    TextLayer { chars: usize },
    /// The text layer was blank and OCR supplied the text (possibly empty).
    Ocr { chars: usize },
    /// Neither the text layer nor OCR produced anything; the page
    /// contributes no text.
    Failed { reason: String },
}

/// Recovery provenance for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecovery {
    pub page_number: usize,
    pub outcome: PageOutcome,
}

/// Full text recovered from a document, in page order, plus per-page
/// provenance.
#[derive(Debug, Clone)]
pub struct RecoveredText {
    pub text: String,
    pub pages: Vec<PageRecovery>,
}

/// Recover the text of every page of a document.
///
/// Each page is tried natively first; OCR runs only when the text layer is
/// empty or whitespace. An OCR failure is absorbed: the page contributes no
/// text and recovery continues with the next page. Only a document-level
/// extraction failure aborts. Each page is attempted exactly once.
///
/// An entirely empty result is valid and means "nothing to quiz on".
pub fn recover_text(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    ocr: &dyn OcrEngine,
) -> Result<RecoveredText, QuizError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let mut text = String::new();
    let mut recoveries = Vec::with_capacity(pages.len());

    for page in &pages {
        if !page.text.trim().is_empty() {
            text.push_str(&page.text);
            text.push('\n');
            recoveries.push(PageRecovery {
                page_number: page.page_number,
                outcome: PageOutcome::TextLayer {
                    chars: page.text.chars().count(),
                },
            });
            continue;
        }

        match ocr.recognize_page(pdf_bytes, page.page_number) {
            Ok(ocr_text) => {
                text.push_str(&ocr_text);
                text.push('\n');
                recoveries.push(PageRecovery {
                    page_number: page.page_number,
                    outcome: PageOutcome::Ocr {
                        chars: ocr_text.chars().count(),
                    },
                });
            }
            Err(e) => {
                recoveries.push(PageRecovery {
                    page_number: page.page_number,
                    outcome: PageOutcome::Failed {
                        reason: e.to_string(),
                    },
                });
            }
        }
    }

    Ok(RecoveredText {
        text,
        pages: recoveries,
    })
}
