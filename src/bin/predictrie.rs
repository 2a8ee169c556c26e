//! Command-line harness for exercising a [`predictrie::Trie`] built from a
//! dictionary file. Not a stable interface; exit codes are unspecified.
//! This binary exists for manual testing and demonstration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use predictrie::{Trie, TrieError};

#[derive(Parser)]
#[command(name = "predictrie", about = "Weighted-trie completion and correction")]
struct Cli {
    /// Path to the dictionary file to load.
    #[arg(long)]
    dict: PathBuf,

    /// Whether the dictionary's lines carry a weight column.
    #[arg(long, default_value_t = true)]
    weighted: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Top-k completions of a prefix, ranked by weight.
    Complete {
        prefix: String,
        /// Signed on the command line so a negative value can be rejected
        /// with a proper error instead of clap's generic parse failure.
        #[arg(short, long, default_value_t = 10)]
        k: i64,
    },
    /// Words within a Levenshtein distance of a possibly misspelled word.
    Correct {
        word: String,
        #[arg(short = 'd', long = "max-distance", default_value_t = 2)]
        max_distance: i64,
        #[arg(long)]
        keyboard_proximity: bool,
    },
}

/// Rejects a negative CLI count before it ever reaches the trie, whose
/// own API takes `usize` and so cannot express "negative" at all.
fn non_negative(value: i64, name: &str) -> Result<usize, TrieError> {
    usize::try_from(value).map_err(|_| {
        TrieError::InvalidArgument(format!("{name} must not be negative, got {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_and_positive() {
        assert_eq!(0, non_negative(0, "k").unwrap());
        assert_eq!(5, non_negative(5, "k").unwrap());
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert!(matches!(
            non_negative(-1, "k"),
            Err(TrieError::InvalidArgument(_))
        ));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut trie = Trie::new();
    let inserted = trie
        .insert_from_file(&cli.dict, cli.weighted, &[' ', '\t'])
        .with_context(|| format!("loading dictionary {}", cli.dict.display()))?;
    log::info!("loaded {inserted} words from {}", cli.dict.display());

    match cli.command {
        Command::Complete { prefix, k } => {
            let k = non_negative(k, "k")?;
            for word in trie.complete(&prefix, k) {
                println!("{word}");
            }
        }
        Command::Correct {
            word,
            max_distance,
            keyboard_proximity,
        } => {
            let max_distance = non_negative(max_distance, "max-distance")?;
            for suggestion in trie.correct_ranked(&word, max_distance, keyboard_proximity) {
                println!(
                    "{}\tdistance={}\tweight={}",
                    suggestion.word, suggestion.distance, suggestion.weight
                );
            }
        }
    }

    Ok(())
}
