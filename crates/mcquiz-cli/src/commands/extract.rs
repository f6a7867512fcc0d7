use mcquiz_core::error::QuizError;
use mcquiz_core::extraction::ocr::TesseractOcr;
use mcquiz_core::extraction::pdftotext::PdftotextExtractor;
use mcquiz_core::extraction::PageOutcome;
use mcquiz_core::ExtractedQuiz;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    ocr_lang: Option<String>,
) -> Result<(), QuizError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extracted = extract_from_pdf(&pdf_bytes, ocr_lang)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extracted)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} question(s), written to {}",
                extracted.questions.len(),
                path.display()
            );
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&extracted)?,
                _ => output::table::format_questions(&extracted.questions),
            };
            println!("{output_str}");
        }
    }

    report_recovery_problems(&extracted);

    Ok(())
}

/// Run the full PDF pipeline with the real pdftotext/tesseract backends.
pub(crate) fn extract_from_pdf(
    pdf_bytes: &[u8],
    ocr_lang: Option<String>,
) -> Result<ExtractedQuiz, QuizError> {
    let extractor = PdftotextExtractor::new();
    let ocr = match ocr_lang {
        Some(lang) => TesseractOcr::new().with_language(lang),
        None => TesseractOcr::new(),
    };
    let mut rng = rand::thread_rng();
    mcquiz_core::build_quiz(pdf_bytes, &extractor, &ocr, &mut rng)
}

/// Surface per-page recovery failures and dropped segments on stderr.
pub(crate) fn report_recovery_problems(extracted: &ExtractedQuiz) {
    for page in &extracted.pages {
        if let PageOutcome::Failed { reason } = &page.outcome {
            eprintln!("  warning: page {}: {}", page.page_number, reason);
        }
    }
    if !extracted.skipped_segments.is_empty() {
        eprintln!(
            "  {} segment(s) skipped during parsing",
            extracted.skipped_segments.len()
        );
    }
}
