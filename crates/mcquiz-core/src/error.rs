#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("OCR tools not found. Install poppler (pdftoppm) and tesseract")]
    OcrToolsNotFound,

    #[error("OCR failed with exit code {code}: {stderr}")]
    OcrFailed { code: i32, stderr: String },

    #[error("cannot start a quiz with zero questions")]
    EmptyQuiz,

    #[error("quiz is already completed; start a new one to continue")]
    SessionCompleted,

    #[error("quiz is not completed yet; finish it before scoring")]
    SessionNotCompleted,

    #[error("question index {index} out of range (quiz has {count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option '{0}' is not offered by the current question")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
