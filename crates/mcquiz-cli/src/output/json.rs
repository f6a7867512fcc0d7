use mcquiz_core::error::QuizError;
use mcquiz_core::scoring::QuizScore;

pub fn print_score(score: &QuizScore) -> Result<(), QuizError> {
    let json = serde_json::to_string_pretty(score)?;
    println!("{json}");
    Ok(())
}
