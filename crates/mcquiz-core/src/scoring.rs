use crate::error::QuizError;
use crate::session::QuizSession;
use serde::{Deserialize, Serialize};

/// Final result of a completed quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub elapsed_seconds: u64,
}

/// Score a completed session.
///
/// A question counts as correct when its last recorded answer equals its
/// correct option; unanswered questions count as incorrect. Rejected while
/// the session is still in progress. Pure: calling it again returns the
/// same counts.
pub fn score(session: &QuizSession) -> Result<QuizScore, QuizError> {
    if !session.is_completed() {
        return Err(QuizError::SessionNotCompleted);
    }

    let total = session.question_count();
    let correct = session
        .questions()
        .iter()
        .filter(|q| session.answer_for(q.id) == Some(q.correct_answer))
        .count();

    // total >= 1 is guaranteed by the session start precondition
    let percentage = correct as f64 / total as f64 * 100.0;

    Ok(QuizScore {
        correct,
        total,
        percentage,
        elapsed_seconds: session.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Difficulty, OptionKey, Question};

    fn question(id: u32, correct: OptionKey) -> Question {
        Question {
            id,
            prompt: format!("Prompt {}", id),
            options: vec![
                AnswerOption {
                    key: OptionKey::A,
                    text: "first".into(),
                },
                AnswerOption {
                    key: OptionKey::B,
                    text: "second".into(),
                },
            ],
            correct_answer: correct,
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_in_progress_session_cannot_be_scored() {
        let session = QuizSession::start(vec![question(1, OptionKey::A)]).unwrap();
        assert!(matches!(
            score(&session),
            Err(QuizError::SessionNotCompleted)
        ));
    }

    #[test]
    fn test_unanswered_questions_count_as_incorrect() {
        let mut session = QuizSession::start(vec![question(1, OptionKey::A)]).unwrap();
        session.finish().unwrap();

        let result = score(&session).unwrap();
        assert_eq!(result.correct, 0);
        assert_eq!(result.total, 1);
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_half_right_is_fifty_percent() {
        let mut session =
            QuizSession::start(vec![question(1, OptionKey::B), question(2, OptionKey::A)])
                .unwrap();
        session.answer(OptionKey::B).unwrap();
        session.navigate(1).unwrap();
        session.answer(OptionKey::B).unwrap();
        session.finish().unwrap();

        let result = score(&session).unwrap();
        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.percentage, 50.0);
    }

    #[test]
    fn test_last_answer_is_the_scored_one() {
        let mut session = QuizSession::start(vec![question(1, OptionKey::B)]).unwrap();
        session.answer(OptionKey::B).unwrap();
        session.answer(OptionKey::A).unwrap();
        session.finish().unwrap();

        assert_eq!(score(&session).unwrap().correct, 0);
    }

    #[test]
    fn test_scoring_is_repeatable() {
        let mut session = QuizSession::start(vec![question(1, OptionKey::A)]).unwrap();
        session.answer(OptionKey::A).unwrap();
        session.finish().unwrap();

        let first = score(&session).unwrap();
        let second = score(&session).unwrap();
        assert_eq!(first.correct, second.correct);
        assert_eq!(first.total, second.total);
        assert_eq!(first.percentage, second.percentage);
    }
}
