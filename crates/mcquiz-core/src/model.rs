use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter key of an answer choice. A question carries at most four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Parse a user-supplied option letter, accepting lower case and
    /// surrounding whitespace. Anything that is not a single A-D letter
    /// returns None.
    pub fn from_str_loose(s: &str) -> Option<OptionKey> {
        let trimmed = s.trim();
        if trimmed.chars().count() != 1 {
            return None;
        }
        match trimmed.chars().next()?.to_ascii_uppercase() {
            'A' => Some(OptionKey::A),
            'B' => Some(OptionKey::B),
            'C' => Some(OptionKey::C),
            'D' => Some(OptionKey::D),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            OptionKey::A => 'A',
            OptionKey::B => 'B',
            OptionKey::C => 'C',
            OptionKey::D => 'D',
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Cosmetic difficulty tag. Not derived from question content; assigned
/// uniformly at random by the segmenter from an injected generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn random<R: Rng>(rng: &mut R) -> Difficulty {
        match rng.gen_range(0..3) {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// One labeled answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub key: OptionKey,
    pub text: String,
}

/// A single extracted multiple-choice question.
///
/// Immutable once produced by segmentation; all interaction state
/// (answers, marks, per-question timing) lives on the session instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based sequential id, stable for the lifetime of a session.
    pub id: u32,
    /// Question text, at most 300 characters.
    pub prompt: String,
    /// Options in order of first appearance in the source block.
    pub options: Vec<AnswerOption>,
    pub correct_answer: OptionKey,
    pub difficulty: Difficulty,
}

impl Question {
    /// Look up the text of an option by letter.
    pub fn option_text(&self, key: OptionKey) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_option_key_loose_parse() {
        assert_eq!(OptionKey::from_str_loose("A"), Some(OptionKey::A));
        assert_eq!(OptionKey::from_str_loose(" b "), Some(OptionKey::B));
        assert_eq!(OptionKey::from_str_loose("d"), Some(OptionKey::D));
        assert_eq!(OptionKey::from_str_loose("E"), None);
        assert_eq!(OptionKey::from_str_loose("AB"), None);
        assert_eq!(OptionKey::from_str_loose("Rome"), None);
        assert_eq!(OptionKey::from_str_loose(""), None);
    }

    #[test]
    fn test_option_key_display() {
        assert_eq!(OptionKey::A.to_string(), "A");
        assert_eq!(OptionKey::D.to_string(), "D");
    }

    #[test]
    fn test_difficulty_random_covers_all_variants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            match Difficulty::random(&mut rng) {
                Difficulty::Easy => seen[0] = true,
                Difficulty::Medium => seen[1] = true,
                Difficulty::Hard => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_option_text_lookup() {
        let q = Question {
            id: 1,
            prompt: "What is 2+2?".into(),
            options: vec![
                AnswerOption {
                    key: OptionKey::A,
                    text: "3".into(),
                },
                AnswerOption {
                    key: OptionKey::B,
                    text: "4".into(),
                },
            ],
            correct_answer: OptionKey::B,
            difficulty: Difficulty::Easy,
        };
        assert_eq!(q.option_text(OptionKey::B), Some("4"));
        assert_eq!(q.option_text(OptionKey::C), None);
    }
}
