use mcquiz_core::error::QuizError;
use mcquiz_core::explain;
use mcquiz_core::model::OptionKey;
use mcquiz_core::scoring;
use mcquiz_core::session::{AnswerFeedback, QuizSession};
use mcquiz_core::ExtractedQuiz;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::commands::extract;
use crate::output;

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerCommand {
    Answer(OptionKey),
    Next,
    Previous,
    /// 1-based question number, as typed.
    Goto(usize),
    Mark,
    Explain,
    Status,
    Finish,
    Quit,
    Help,
}

fn parse_player_command(line: &str) -> Option<PlayerCommand> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_lowercase();
    let tail = words.next();

    match (head.as_str(), tail) {
        ("n" | "next", None) => Some(PlayerCommand::Next),
        ("p" | "prev" | "previous", None) => Some(PlayerCommand::Previous),
        ("m" | "mark", None) => Some(PlayerCommand::Mark),
        ("e" | "explain", None) => Some(PlayerCommand::Explain),
        ("s" | "status", None) => Some(PlayerCommand::Status),
        ("f" | "finish", None) => Some(PlayerCommand::Finish),
        ("q" | "quit", None) => Some(PlayerCommand::Quit),
        ("?" | "h" | "help", None) => Some(PlayerCommand::Help),
        ("g" | "goto", Some(number)) => number.parse().ok().map(PlayerCommand::Goto),
        (head, None) => {
            if let Ok(number) = head.parse::<usize>() {
                return Some(PlayerCommand::Goto(number));
            }
            OptionKey::from_str_loose(head).map(PlayerCommand::Answer)
        }
        _ => None,
    }
}

pub fn run(
    input_file: PathBuf,
    json_score: bool,
    ocr_lang: Option<String>,
) -> Result<(), QuizError> {
    let extracted = load_questions(&input_file, ocr_lang)?;
    extract::report_recovery_problems(&extracted);

    if extracted.questions.is_empty() {
        println!("No questions found in {}.", input_file.display());
        return Ok(());
    }

    println!(
        "{} question(s) loaded from {}. Type ? for commands.",
        extracted.questions.len(),
        input_file.display()
    );

    let mut session = QuizSession::start(extracted.questions)?;
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        println!();
        print!("{}", output::table::format_question_view(&session));
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // EOF: abandon without scoring
            println!();
            println!("Quiz abandoned.");
            return Ok(());
        }

        let command = match parse_player_command(&line) {
            Some(command) => command,
            None => {
                println!("Unrecognized input {:?}; type ? for commands.", line.trim());
                continue;
            }
        };

        match command {
            PlayerCommand::Answer(choice) => match session.answer(choice) {
                Ok(AnswerFeedback::Correct) => println!("Correct!"),
                Ok(AnswerFeedback::Incorrect) => println!("Incorrect."),
                Err(e) => println!("{e}"),
            },
            PlayerCommand::Next => {
                if session.next().is_err() {
                    println!("Already at the last question; f finishes the quiz.");
                }
            }
            PlayerCommand::Previous => session.previous()?,
            PlayerCommand::Goto(number) => match number.checked_sub(1) {
                Some(index) => {
                    if let Err(e) = session.navigate(index) {
                        println!("{e}");
                    }
                }
                None => println!("Question numbers start at 1."),
            },
            PlayerCommand::Mark => {
                if session.toggle_mark()? {
                    println!("Marked for review.");
                } else {
                    println!("Review mark removed.");
                }
            }
            PlayerCommand::Explain => {
                println!("{}", explain::explain(session.current_question()).text);
            }
            PlayerCommand::Status => {
                println!(
                    "Answered {}/{}, {} marked for review.",
                    session.answered_count(),
                    session.question_count(),
                    session.marked_count()
                );
            }
            PlayerCommand::Finish => break,
            PlayerCommand::Quit => {
                println!("Quiz abandoned.");
                return Ok(());
            }
            PlayerCommand::Help => print_help(),
        }
    }

    session.finish()?;
    let score = scoring::score(&session)?;

    println!();
    if json_score {
        output::json::print_score(&score)?;
    } else {
        println!("{}", output::table::format_score(&score));
    }

    Ok(())
}

/// Load questions from a pre-extracted JSON file, or run the PDF pipeline.
fn load_questions(input_file: &Path, ocr_lang: Option<String>) -> Result<ExtractedQuiz, QuizError> {
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let json_bytes = std::fs::read(input_file)?;
        let extracted: ExtractedQuiz = serde_json::from_slice(&json_bytes)?;
        Ok(extracted)
    } else {
        let pdf_bytes = std::fs::read(input_file)?;
        extract::extract_from_pdf(&pdf_bytes, ocr_lang)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  a-d        answer the current question");
    println!("  n, p       next / previous question");
    println!("  g N        go to question N");
    println!("  m          toggle the review mark");
    println!("  e          explain the current question");
    println!("  s          progress summary");
    println!("  f          finish and score the quiz");
    println!("  q          quit without scoring");
}
