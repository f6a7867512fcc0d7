use crate::model::Question;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category a question is filed under for explanation purposes,
/// guessed from keywords in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Vocabulary,
    Grammar,
    Comprehension,
    Logic,
    General,
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionCategory::Vocabulary => "vocabulary",
            QuestionCategory::Grammar => "grammar",
            QuestionCategory::Comprehension => "comprehension",
            QuestionCategory::Logic => "logic",
            QuestionCategory::General => "general",
        };
        write!(f, "{}", s)
    }
}

const VOCABULARY_KEYWORDS: &[&str] = &["synonym", "antonym", "word", "meaning"];
const GRAMMAR_KEYWORDS: &[&str] = &["tense", "grammar", "sentence", "verb"];
const COMPREHENSION_KEYWORDS: &[&str] = &["passage", "read", "comprehension"];
const LOGIC_KEYWORDS: &[&str] = &["logic", "reason", "deduce", "infer"];

/// Categorize a prompt by keyword lookup, case-insensitive. Categories are
/// tried in a fixed order and the first hit wins.
pub fn categorize(prompt: &str) -> QuestionCategory {
    let lower = prompt.to_lowercase();
    if contains_any(&lower, VOCABULARY_KEYWORDS) {
        QuestionCategory::Vocabulary
    } else if contains_any(&lower, GRAMMAR_KEYWORDS) {
        QuestionCategory::Grammar
    } else if contains_any(&lower, COMPREHENSION_KEYWORDS) {
        QuestionCategory::Comprehension
    } else if contains_any(&lower, LOGIC_KEYWORDS) {
        QuestionCategory::Logic
    } else {
        QuestionCategory::General
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// A canned study hint for one question.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub category: QuestionCategory,
    pub text: String,
}

/// Produce a templated explanation for a question. Purely lexical; it
/// names the correct option without judging whether it really is correct.
pub fn explain(question: &Question) -> Explanation {
    let category = categorize(&question.prompt);
    let text = format!(
        "This is a {} question.\n\
         Why {} is correct: it follows the rules of {}, \
         while the other options contain common mistakes.\n\
         Tip: practice more {} questions to build speed and accuracy.",
        category, question.correct_answer, category, category,
    );
    Explanation { category, text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Difficulty, OptionKey};

    #[test]
    fn test_keyword_categories() {
        assert_eq!(
            categorize("Pick the synonym of 'rapid'"),
            QuestionCategory::Vocabulary
        );
        assert_eq!(
            categorize("Which TENSE is used here?"),
            QuestionCategory::Grammar
        );
        assert_eq!(
            categorize("According to the passage, who left?"),
            QuestionCategory::Comprehension
        );
        assert_eq!(
            categorize("What can you infer from the data?"),
            QuestionCategory::Logic
        );
        assert_eq!(categorize("What is 2+2?"), QuestionCategory::General);
    }

    #[test]
    fn test_first_category_hit_wins() {
        // "word" (vocabulary) appears before "verb" (grammar) in the
        // lookup order, regardless of position in the prompt.
        assert_eq!(
            categorize("Which verb fits this word?"),
            QuestionCategory::Vocabulary
        );
    }

    #[test]
    fn test_explanation_names_the_correct_option() {
        let question = Question {
            id: 1,
            prompt: "What is the meaning of 'ephemeral'?".into(),
            options: vec![AnswerOption {
                key: OptionKey::C,
                text: "short-lived".into(),
            }],
            correct_answer: OptionKey::C,
            difficulty: Difficulty::Hard,
        };

        let explanation = explain(&question);
        assert_eq!(explanation.category, QuestionCategory::Vocabulary);
        assert!(explanation.text.contains("Why C is correct"));
        assert!(explanation.text.contains("vocabulary"));
    }
}
