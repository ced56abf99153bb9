use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use plagcheck::config::Config;
use plagcheck::output::{format_percent, terminal};
use plagcheck::SimilarityError;

/// plagcheck: lexical plagiarism detection.
///
/// Compares a text against a reference text and reports how similar their
/// vocabulary is, as a TF-IDF cosine score.
#[derive(Parser)]
#[command(name = "plagcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a text against a reference text
    Compare {
        /// The text to check
        #[arg(long, short = 't', conflicts_with = "file")]
        text: Option<String>,

        /// Read the text to check from a file
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// The reference text
        #[arg(long, conflicts_with = "ref_file")]
        ref_text: Option<String>,

        /// Read the reference text from a file
        #[arg(long)]
        ref_file: Option<PathBuf>,

        /// Print the full comparison as JSON
        #[arg(long)]
        json: bool,

        /// Number of shared terms to list (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Show the normalized tokens for a text
    Normalize {
        /// The text to normalize
        #[arg(long, short = 't', conflicts_with = "file")]
        text: Option<String>,

        /// Read the text to normalize from a file
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Print the tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show which linguistic resources are active
    Resources,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagcheck=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            text,
            file,
            ref_text,
            ref_file,
            json,
            top,
        } => {
            let config = Config::load()?;
            let text = read_input(text, file.as_deref(), "text", "compare")?;
            let reference =
                read_input(ref_text, ref_file.as_deref(), "reference text", "compare")?;
            let checker = config.build_checker()?;

            let comparison = match checker.analyze(&text, &reference) {
                Ok(comparison) => comparison,
                Err(err @ SimilarityError::EmptyInput { .. }) => {
                    eprintln!("{} {err}", "Error:".red().bold());
                    std::process::exit(2);
                }
                Err(err) => return Err(err.into()),
            };

            info!(score = %format_percent(comparison.score), "Comparison finished");

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(&comparison, top);
            }
        }

        Commands::Normalize { text, file, json } => {
            let config = Config::load()?;
            let text = read_input(text, file.as_deref(), "text", "normalize")?;
            let checker = config.build_checker()?;
            let tokens = checker.normalizer().normalize(&text);

            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                terminal::display_tokens(&tokens);
            }
        }

        Commands::Resources => {
            let config = Config::load()?;
            let stop_words = config.stop_words()?;
            let lemma_table = config.lemma_table()?;

            match &config.stop_words_file {
                Some(path) => println!(
                    "Stop words: {} ({} words)",
                    path.display(),
                    stop_words.len()
                ),
                None => println!(
                    "Stop words: bundled {} list ({} words)",
                    config.stop_word_list.name(),
                    stop_words.len()
                ),
            }
            println!(
                "Lemma table: {} exceptions, {} invariants{}",
                lemma_table.exception_count(),
                lemma_table.invariant_count(),
                config
                    .lemma_file
                    .as_ref()
                    .map(|p| format!(" (includes {})", p.display()))
                    .unwrap_or_default()
            );
            println!(
                "Vectorizer: min token length {}, smooth idf {}, sublinear tf {}",
                config.vectorizer.min_token_chars,
                config.vectorizer.smooth_idf,
                config.vectorizer.sublinear_tf
            );
        }
    }

    Ok(())
}

/// Resolve one input from either an inline string or a file path.
/// `command` names the subcommand in the help hint.
fn read_input(
    text: Option<String>,
    file: Option<&Path>,
    label: &str,
    command: &str,
) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {label} from {}", path.display())),
        (None, None) => anyhow::bail!(
            "No {label} given. Pass it inline or point at a file.\n\
             Run `plagcheck {command} --help` for the available flags."
        ),
    }
}
