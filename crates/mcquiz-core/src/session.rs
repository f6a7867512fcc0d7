use crate::error::QuizError;
use crate::model::{OptionKey, Question};
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

/// Signal emitted on every recorded answer. The hosting layer decides how
/// to surface it (the terminal player prints it immediately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect,
}

/// Status of one question slot in the navigation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    pub index: usize,
    pub id: u32,
    pub answered: bool,
    pub marked: bool,
    pub current: bool,
}

/// Per-question interaction counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionProgress {
    /// How many times an answer was recorded, re-answers included.
    pub attempts: u32,
    /// Total time the question spent as the current one.
    pub time_spent: Duration,
}

/// An in-progress or completed quiz over an owned set of questions.
///
/// There is no separate idle state: idle is the absence of a session, and
/// reset is dropping the value. Mutating transitions reject invalid
/// preconditions with an error instead of corrupting state, and once
/// `finish` has run only read access remains.
///
/// Invariant: `current` always indexes into `questions`, which is
/// non-empty from construction onward.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: BTreeMap<u32, OptionKey>,
    marked: BTreeSet<u32>,
    progress: BTreeMap<u32, QuestionProgress>,
    current: usize,
    started_at: Instant,
    question_started_at: Instant,
    completed: bool,
}

impl QuizSession {
    /// Start a session at the first question. An empty question list is
    /// refused; "no questions found" must be handled before this point.
    pub fn start(questions: Vec<Question>) -> Result<QuizSession, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        let now = Instant::now();
        Ok(QuizSession {
            questions,
            answers: BTreeMap::new(),
            marked: BTreeSet::new(),
            progress: BTreeMap::new(),
            current: 0,
            started_at: now,
            question_started_at: now,
            completed: false,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), QuizError> {
        if self.completed {
            return Err(QuizError::SessionCompleted);
        }
        Ok(())
    }

    /// Fold the time spent on the current question into its counter and
    /// restart the per-question clock.
    fn bank_question_time(&mut self) {
        let id = self.questions[self.current].id;
        self.progress.entry(id).or_default().time_spent += self.question_started_at.elapsed();
        self.question_started_at = Instant::now();
    }

    /// Jump to an arbitrary question by 0-based index. Navigating to the
    /// current index is allowed and only restarts the per-question clock.
    pub fn navigate(&mut self, index: usize) -> Result<(), QuizError> {
        self.ensure_in_progress()?;
        if index >= self.questions.len() {
            return Err(QuizError::QuestionOutOfRange {
                index,
                count: self.questions.len(),
            });
        }
        self.bank_question_time();
        self.current = index;
        Ok(())
    }

    /// Advance one question; rejected at the last one.
    pub fn next(&mut self) -> Result<(), QuizError> {
        self.navigate(self.current + 1)
    }

    /// Move back one question; a no-op at the first one.
    pub fn previous(&mut self) -> Result<(), QuizError> {
        self.ensure_in_progress()?;
        if self.current == 0 {
            return Ok(());
        }
        self.bank_question_time();
        self.current -= 1;
        Ok(())
    }

    /// Record an answer for the current question, overwriting any earlier
    /// one, and report whether it matches the correct option. The cursor
    /// does not move. Letters the question does not offer are rejected, so
    /// a recorded answer is always one of the displayed options.
    pub fn answer(&mut self, choice: OptionKey) -> Result<AnswerFeedback, QuizError> {
        self.ensure_in_progress()?;
        let question = &self.questions[self.current];
        if question.option_text(choice).is_none() {
            return Err(QuizError::InvalidOption(choice.to_string()));
        }
        self.answers.insert(question.id, choice);
        self.progress.entry(question.id).or_default().attempts += 1;
        if choice == question.correct_answer {
            Ok(AnswerFeedback::Correct)
        } else {
            Ok(AnswerFeedback::Incorrect)
        }
    }

    /// Toggle the review mark on the current question; returns the new
    /// marked state.
    pub fn toggle_mark(&mut self) -> Result<bool, QuizError> {
        self.ensure_in_progress()?;
        let id = self.questions[self.current].id;
        if self.marked.remove(&id) {
            Ok(false)
        } else {
            self.marked.insert(id);
            Ok(true)
        }
    }

    /// Complete the quiz. Unanswered questions stay unanswered and score
    /// as incorrect.
    pub fn finish(&mut self) -> Result<(), QuizError> {
        self.ensure_in_progress()?;
        self.bank_question_time();
        self.completed = true;
        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Wall-clock time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// The recorded answer for a question id, if any.
    pub fn answer_for(&self, id: u32) -> Option<OptionKey> {
        self.answers.get(&id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    pub fn progress_for(&self, id: u32) -> QuestionProgress {
        self.progress.get(&id).copied().unwrap_or_default()
    }

    /// One slot per question, in order, for rendering a navigation grid.
    pub fn grid(&self) -> Vec<GridSlot> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, q)| GridSlot {
                index,
                id: q.id,
                answered: self.answers.contains_key(&q.id),
                marked: self.marked.contains(&q.id),
                current: index == self.current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Difficulty};

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
            difficulty: Difficulty::Medium,
        }
    }

    fn two_question_session() -> QuizSession {
        QuizSession::start(vec![question(1, OptionKey::B), question(2, OptionKey::A)]).unwrap()
    }

    #[test]
    fn test_start_rejects_empty_question_list() {
        assert!(matches!(
            QuizSession::start(Vec::new()),
            Err(QuizError::EmptyQuiz)
        ));
    }

    #[test]
    fn test_fresh_session_state() {
        let session = two_question_session();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_completed());
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.marked_count(), 0);
        assert_eq!(session.current_question().id, 1);
    }

    #[test]
    fn test_answer_feedback_and_overwrite() {
        let mut session = two_question_session();

        assert_eq!(
            session.answer(OptionKey::A).unwrap(),
            AnswerFeedback::Incorrect
        );
        assert_eq!(
            session.answer(OptionKey::B).unwrap(),
            AnswerFeedback::Correct
        );

        // Last answer wins, both attempts are counted.
        assert_eq!(session.answer_for(1), Some(OptionKey::B));
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.progress_for(1).attempts, 2);
    }

    #[test]
    fn test_answer_must_be_an_offered_option() {
        // The two-question fixture only offers A and B.
        let mut session = two_question_session();
        assert!(matches!(
            session.answer(OptionKey::C),
            Err(QuizError::InvalidOption(_))
        ));
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.progress_for(1).attempts, 0);
    }

    #[test]
    fn test_answer_does_not_move_cursor() {
        let mut session = two_question_session();
        session.answer(OptionKey::B).unwrap();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_navigate_bounds() {
        let mut session = two_question_session();

        session.navigate(1).unwrap();
        assert_eq!(session.current_index(), 1);

        assert!(matches!(
            session.navigate(2),
            Err(QuizError::QuestionOutOfRange { index: 2, count: 2 })
        ));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_navigate_to_current_index_is_allowed() {
        let mut session = two_question_session();
        session.navigate(0).unwrap();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_next_rejected_at_last_question() {
        let mut session = two_question_session();
        session.next().unwrap();
        assert!(session.next().is_err());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_previous_is_noop_at_first_question() {
        let mut session = two_question_session();
        session.previous().unwrap();
        assert_eq!(session.current_index(), 0);

        session.next().unwrap();
        session.previous().unwrap();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_toggle_mark_twice_restores() {
        let mut session = two_question_session();
        assert!(session.toggle_mark().unwrap());
        assert_eq!(session.marked_count(), 1);
        assert!(!session.toggle_mark().unwrap());
        assert_eq!(session.marked_count(), 0);
    }

    #[test]
    fn test_grid_reflects_state() {
        let mut session = two_question_session();
        session.answer(OptionKey::B).unwrap();
        session.toggle_mark().unwrap();
        session.next().unwrap();

        let grid = session.grid();
        assert_eq!(grid.len(), 2);
        assert!(grid[0].answered);
        assert!(grid[0].marked);
        assert!(!grid[0].current);
        assert!(!grid[1].answered);
        assert!(grid[1].current);
    }

    #[test]
    fn test_completed_session_rejects_mutations() {
        let mut session = two_question_session();
        session.finish().unwrap();

        assert!(session.is_completed());
        assert!(matches!(
            session.answer(OptionKey::A),
            Err(QuizError::SessionCompleted)
        ));
        assert!(matches!(
            session.navigate(0),
            Err(QuizError::SessionCompleted)
        ));
        assert!(matches!(
            session.toggle_mark(),
            Err(QuizError::SessionCompleted)
        ));
        assert!(matches!(
            session.finish(),
            Err(QuizError::SessionCompleted)
        ));
    }

    #[test]
    fn test_reads_still_work_after_finish() {
        let mut session = two_question_session();
        session.answer(OptionKey::B).unwrap();
        session.finish().unwrap();

        assert_eq!(session.answer_for(1), Some(OptionKey::B));
        assert_eq!(session.current_question().id, 1);
        assert_eq!(session.grid().len(), 2);
    }

    #[test]
    fn test_time_accounting_never_exceeds_elapsed() {
        let mut session = two_question_session();
        session.navigate(1).unwrap();
        session.navigate(0).unwrap();
        session.finish().unwrap();

        let banked: Duration = [1, 2]
            .iter()
            .map(|&id| session.progress_for(id).time_spent)
            .sum();
        assert!(banked <= session.elapsed());
    }
}
