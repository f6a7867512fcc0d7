pub mod block;

use crate::model::Question;
use block::parse_block;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound on questions extracted from one document.
pub const MAX_QUESTIONS: usize = 20;

lazy_static! {
    /// A question marker: "Q" or "Question", a number, and at least one
    /// separator character, e.g. "Q1.", "question 12)", "Q3 -".
    static ref QUESTION_MARKER: Regex =
        Regex::new(r"(?i)(?:Q|Question\s*)\d+[.)\s:-]+").unwrap();
}

/// A segment that was considered and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSegment {
    /// 1-based position among the segments following a question marker.
    pub position: usize,
    pub reason: String,
}

/// Outcome of segmenting recovered text into question records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segmentation {
    pub questions: Vec<Question>,
    pub skipped_segments: Vec<SkippedSegment>,
}

/// Split recovered text at question markers and parse each segment.
///
/// Everything before the first marker is discarded, at most MAX_QUESTIONS
/// segments are considered, and blank segments are dropped (reported in
/// `skipped_segments`) without leaving a gap in the ids. An empty
/// `questions` vector is a valid outcome meaning "no questions found";
/// callers must not start a session on it.
pub fn segment<R: Rng>(text: &str, rng: &mut R) -> Segmentation {
    let mut questions: Vec<Question> = Vec::new();
    let mut skipped = Vec::new();

    for (position, raw) in QUESTION_MARKER
        .split(text)
        .skip(1) // preamble before the first marker
        .take(MAX_QUESTIONS)
        .enumerate()
    {
        let id = questions.len() as u32 + 1;
        match parse_block(id, raw, rng) {
            Some(question) => questions.push(question),
            None => skipped.push(SkippedSegment {
                position: position + 1,
                reason: "blank segment".to_string(),
            }),
        }
    }

    Segmentation {
        questions,
        skipped_segments: skipped,
    }
}
