pub mod error;
pub mod explain;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod scoring;
pub mod session;

use error::QuizError;
use extraction::{OcrEngine, PageRecovery, PdfExtractor};
use model::Question;
use parsing::SkippedSegment;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything the document-to-quiz pipeline produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedQuiz {
    pub questions: Vec<Question>,
    /// Per-page recovery provenance, for diagnostics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageRecovery>,
    /// Segments that were considered but dropped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_segments: Vec<SkippedSegment>,
}

/// Main API entry point: turn a PDF into quiz questions.
///
/// Recovers text page by page (native text layer first, OCR for blank
/// pages) and segments it into at most `parsing::MAX_QUESTIONS` records.
/// Difficulty assignment draws from the injected `rng`, so a seeded rng
/// makes the whole pipeline deterministic.
///
/// An empty `questions` list is a valid outcome meaning "no questions
/// found"; a session must not be started on it.
pub fn build_quiz<R: Rng>(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    ocr: &dyn OcrEngine,
    rng: &mut R,
) -> Result<ExtractedQuiz, QuizError> {
    let recovered = extraction::recover_text(pdf_bytes, extractor, ocr)?;
    let segmentation = parsing::segment(&recovered.text, rng);

    Ok(ExtractedQuiz {
        questions: segmentation.questions,
        pages: recovered.pages,
        skipped_segments: segmentation.skipped_segments,
    })
}
