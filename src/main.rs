use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use sweng_quiz::{QuestionBank, QuizError, QuizQuestion, DEFAULT_QUESTIONS_PATH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Skip malformed questions instead of rejecting the whole file
    #[arg(long)]
    skip_malformed: bool,

    /// Only list questions carrying this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Print the accepted questions as a JSON array
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), QuizError> {
    let bank = if args.skip_malformed {
        QuestionBank::from_json_lenient(&args.questions)?
    } else {
        QuestionBank::from_json(&args.questions)?
    };
    info!("Loaded {} questions from {}", bank.len(), args.questions.display());

    let selected: Vec<&QuizQuestion> = match &args.tag {
        Some(tag) => bank.with_tag(tag).collect(),
        None => bank.questions().iter().collect(),
    };

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &selected)?;
        writeln!(out)?;
    } else {
        for question in selected {
            writeln!(out, "{}\n", question)?;
        }
    }

    Ok(())
}
