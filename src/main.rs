mod commands;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use review_app::config::Config;
use review_app::{Rating, ReviewStore, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "review")]
#[command(about = "Spaced repetition for question/answer pairs", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "REVIEW_DB")]
    db: Option<PathBuf>,

    /// Review as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "REVIEW_TODAY")]
    today: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a single question/answer pair
    Add { question: String, answer: String },

    /// Import Q/A pairs from a text file (blocks of "Q: ..." / "A: ..." separated by a blank line)
    Import { file: PathBuf },

    /// Import questions from a JSON export
    ImportJson { file: PathBuf },

    /// Export all questions and their review dates to JSON
    ExportJson { file: PathBuf },

    /// List all questions with their next review date
    List,

    /// Show the next question due for review
    Next {
        /// Print the answer as well
        #[arg(short, long)]
        show_answer: bool,
    },

    /// Record whether a question was answered right or wrong
    Rate {
        id: i64,
        /// right or wrong
        rating: Rating,
    },

    /// Delete questions together with their review schedule
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Review every due question interactively
    Review,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.db, cli.today);
    let today = config.today();
    let mut store = ReviewStore::open(&config.db_path)
        .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;
    tracing::debug!(%today, db = %config.db_path.display(), "starting");

    match cli.command {
        Commands::Add { question, answer } => {
            commands::items::add(&store, &question, &answer)?;
        }

        Commands::Import { file } => {
            commands::transfer::import_text(&store, &file)?;
        }

        Commands::ImportJson { file } => {
            commands::transfer::import_items_json(&mut store, &file)?;
        }

        Commands::ExportJson { file } => {
            commands::transfer::export_items_json(&store, &file)?;
        }

        Commands::List => {
            println!("{}", commands::items::list(&store, today)?);
        }

        Commands::Next { show_answer } => {
            println!("{}", commands::review::next(&store, today, show_answer)?);
        }

        Commands::Rate { id, rating } => {
            commands::review::rate(&store, id, rating, today)?;
        }

        Commands::Delete { ids, yes } => {
            commands::items::delete(&mut store, &ids, yes)?;
        }

        Commands::Review => {
            commands::review::interactive(&store, today)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
