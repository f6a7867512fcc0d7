mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mcquiz",
    version,
    about = "Turn PDF study material into interactive multiple-choice quizzes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract quiz questions from a PDF (without playing them)
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted questions to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// OCR language for scanned pages (passed to tesseract, e.g. "eng")
        #[arg(long, value_name = "LANG")]
        ocr_lang: Option<String>,
    },
    /// Run an interactive quiz from a PDF or pre-extracted JSON file
    Play {
        /// Path to a PDF or a previously extracted questions JSON file
        input_file: PathBuf,

        /// Print the final score as JSON instead of the summary banner
        #[arg(long)]
        json_score: bool,

        /// OCR language for scanned pages (passed to tesseract, e.g. "eng")
        #[arg(long, value_name = "LANG")]
        ocr_lang: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            ocr_lang,
        } => commands::extract::run(input_file, &output, out, ocr_lang),
        Commands::Play {
            input_file,
            json_score,
            ocr_lang,
        } => commands::play::run(input_file, json_score, ocr_lang),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
