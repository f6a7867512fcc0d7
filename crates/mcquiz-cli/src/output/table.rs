use mcquiz_core::model::Question;
use mcquiz_core::scoring::QuizScore;
use mcquiz_core::session::QuizSession;
use std::time::Duration;

/// Listing of extracted questions for `extract` table output.
pub fn format_questions(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions found.".to_string();
    }

    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "Q{} [{}] {}\n",
            question.id, question.difficulty, question.prompt
        ));
        for option in &question.options {
            out.push_str(&format!("    {}) {}\n", option.key, option.text));
        }
        out.push_str(&format!("  answer: {}\n", question.correct_answer));
    }
    out
}

/// The current question with options, the player's answer, and the
/// navigation grid.
pub fn format_question_view(session: &QuizSession) -> String {
    let question = session.current_question();
    let mut out = String::new();

    out.push_str(&format!(
        "[{}] Question {} of {} ({})\n",
        format_duration(session.elapsed()),
        session.current_index() + 1,
        session.question_count(),
        question.difficulty
    ));
    out.push('\n');
    out.push_str(&question.prompt);
    out.push('\n');
    out.push('\n');

    let chosen = session.answer_for(question.id);
    for option in &question.options {
        let marker = if chosen == Some(option.key) { '*' } else { ' ' };
        out.push_str(&format!("  {} {}) {}\n", marker, option.key, option.text));
    }

    out.push('\n');
    out.push_str(&format_grid(session));
    out.push('\n');
    out
}

/// One slot per question: >..< wraps the current one, * means answered,
/// + means marked for review.
pub fn format_grid(session: &QuizSession) -> String {
    let slots: Vec<String> = session
        .grid()
        .iter()
        .map(|slot| {
            let mut label = slot.id.to_string();
            if slot.answered {
                label.push('*');
            }
            if slot.marked {
                label.push('+');
            }
            if slot.current {
                format!(">{label}<")
            } else {
                label
            }
        })
        .collect();
    format!("Grid: {}", slots.join(" "))
}

pub fn format_score(score: &QuizScore) -> String {
    format!(
        "=== Quiz completed ===\n\
         Score: {}/{} ({:.1}%)\n\
         Time:  {}",
        score.correct,
        score.total,
        score.percentage,
        format_duration(Duration::from_secs(score.elapsed_seconds))
    )
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
