//! Word-guess advisor CLI
//!
//! Feed it your guesses and their feedback; it prints the words still in
//! play and the next guesses ranked by expected information gain.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use wordle_advisor::{
    commands::{analyze_word, recommend},
    input::parse_history,
    output::{print_analysis_result, print_recommendation},
    solver::Observation,
    wordlists::{Pools, build_pools, words_from_str},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Recommends the most informative next guess from your game history",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// History as comma-separated WORD:PATTERN entries, e.g.
    /// "CRANE:GYWGW, SLATE:WWGGW"; omit to rank opening guesses
    history: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default), or a path to a plain word list or
    /// raw JS word-data file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of ranked guesses to show
    #[arg(short = 't', long, global = true, default_value = "15")]
    top: usize,

    /// Rank only words that can be the answer, not the full guess list
    #[arg(long, global = true)]
    answers_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank next guesses for a game history (default)
    Recommend {
        /// History as comma-separated WORD:PATTERN entries, e.g.
        /// "CRANE:GYWGW, SLATE:WWGGW"; omit to rank opening guesses
        history: Option<String>,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Optional history to reduce the candidate set first
        #[arg(short = 'H', long)]
        history: Option<String>,
    },
}

/// Load the pools based on the -w flag
fn load_pools(wordlist_mode: &str) -> Result<Pools> {
    if wordlist_mode == "embedded" {
        return Pools::embedded().context("embedded word lists are malformed");
    }

    let raw = fs::read_to_string(wordlist_mode)
        .with_context(|| format!("failed to read word list '{wordlist_mode}'"))?;

    // Raw JS word-data blobs carry the answer array marker; anything else
    // is treated as a plain newline-delimited list used for both pools.
    if raw.contains("var Aa=[") {
        build_pools(&raw).with_context(|| format!("failed to parse word data '{wordlist_mode}'"))
    } else {
        Pools::new(words_from_str(&raw), Vec::new())
            .with_context(|| format!("word list '{wordlist_mode}' is not a usable pool"))
    }
}

fn parse_history_arg(history: Option<&str>) -> Result<Vec<Observation>> {
    match history {
        Some(text) => parse_history(text).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(Vec::new()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pools = load_pools(&cli.wordlist)?;

    // A bare history argument is the recommend flow without the subcommand
    let command = cli.command.unwrap_or(Commands::Recommend {
        history: cli.history,
    });

    match command {
        Commands::Recommend { history } => {
            let observations = parse_history_arg(history.as_deref())?;
            let result = recommend(&pools, &observations, cli.top, cli.answers_only)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_recommendation(&result);
            Ok(())
        }
        Commands::Analyze { word, history } => {
            let observations = parse_history_arg(history.as_deref())?;
            let result = analyze_word(&word, &pools, &observations)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}
