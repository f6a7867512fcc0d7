use crate::model::{AnswerOption, Difficulty, OptionKey, Question};
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

/// Prompts longer than this are cut off. Keeps a stray page of prose that
/// slipped past segmentation from becoming a "question".
pub const MAX_PROMPT_CHARS: usize = 300;

lazy_static! {
    /// Boundary where the prompt ends: the first option label or an
    /// explicit answer marker.
    static ref PROMPT_END: Regex = Regex::new(r"(?i)A\)|Answer:").unwrap();
    /// An option label: a single capital letter A-D followed by ")".
    static ref OPTION_MARKER: Regex = Regex::new(r"([A-D])\)").unwrap();
    /// Explicit correct-answer declaration, e.g. "Answer: B".
    static ref ANSWER: Regex = Regex::new(r"(?i)Answer:\s*([A-D])").unwrap();
    /// The bare answer label, used to bound option text.
    static ref ANSWER_LABEL: Regex = Regex::new(r"(?i)Answer:").unwrap();
}

/// Parse one raw segment into a question record.
///
/// Returns None for blank segments; everything else yields a record, with
/// placeholder options and a default answer filling in whatever the text
/// does not declare.
pub fn parse_block<R: Rng>(id: u32, block: &str, rng: &mut R) -> Option<Question> {
    if block.trim().is_empty() {
        return None;
    }

    Some(Question {
        id,
        prompt: extract_prompt(block),
        options: extract_options(block),
        correct_answer: extract_answer(block),
        difficulty: Difficulty::random(rng),
    })
}

/// The prompt is everything before the first option label or answer
/// marker, whichever comes first, trimmed and capped at MAX_PROMPT_CHARS.
fn extract_prompt(block: &str) -> String {
    let head = match PROMPT_END.find(block) {
        Some(m) => &block[..m.start()],
        None => block,
    };
    truncate_chars(head.trim(), MAX_PROMPT_CHARS)
}

/// Collect labeled options in order of first appearance.
///
/// An option's text runs from its label to the next option label, the
/// answer marker, or the end of the line, whichever comes first. A
/// repeated letter keeps its original position but takes the later text.
/// A segment with no labels at all gets four placeholder options.
fn extract_options(block: &str) -> Vec<AnswerOption> {
    let markers: Vec<(usize, usize, OptionKey)> = OPTION_MARKER
        .captures_iter(block)
        .filter_map(|cap| {
            let m = cap.get(0)?;
            let key = OptionKey::from_str_loose(cap.get(1)?.as_str())?;
            Some((m.start(), m.end(), key))
        })
        .collect();

    let mut options: Vec<AnswerOption> = Vec::new();
    for (i, &(_, text_start, key)) in markers.iter().enumerate() {
        let text_end = markers
            .get(i + 1)
            .map(|&(next_start, _, _)| next_start)
            .unwrap_or(block.len());
        let text = option_text(&block[text_start..text_end]);
        match options.iter_mut().find(|o| o.key == key) {
            Some(existing) => existing.text = text,
            None => options.push(AnswerOption { key, text }),
        }
    }

    if options.is_empty() {
        return placeholder_options();
    }
    options
}

/// Cut raw option text at the first line break or answer marker, then trim.
fn option_text(raw: &str) -> String {
    let mut span = raw;
    if let Some(pos) = span.find('\n') {
        span = &span[..pos];
    }
    if let Some(m) = ANSWER_LABEL.find(span) {
        span = &span[..m.start()];
    }
    span.trim().to_string()
}

/// The declared answer, normalized to uppercase; A when none is declared.
fn extract_answer(block: &str) -> OptionKey {
    ANSWER
        .captures(block)
        .and_then(|cap| OptionKey::from_str_loose(&cap[1]))
        .unwrap_or(OptionKey::A)
}

fn placeholder_options() -> Vec<AnswerOption> {
    OptionKey::ALL
        .iter()
        .map(|&key| AnswerOption {
            key,
            text: format!("Option {}", key),
        })
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
