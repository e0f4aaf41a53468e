//! Word Chain - CLI
//!
//! Play the word-chain game in the terminal, or inspect how words score.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_chain::{
    commands::{RankConfig, rank_words, run_play, score_report},
    game::GameEngine,
    lexicon::{
        Lexicon, LexiconSource,
        loader::{DEFAULT_PAIR_FREQ_PATH, DEFAULT_WORDS_PATH},
    },
    output::{print_rank_result, print_score_report},
};

#[derive(Parser)]
#[command(
    name = "word_chain",
    about = "Word-chain game scored by letter-pair rarity",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: one word per line (built-in words if the file is missing)
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Letter-pair frequency table as a JSON object
    #[arg(short = 'f', long, global = true, default_value = DEFAULT_PAIR_FREQ_PATH)]
    freq: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Seed for the opening word, for reproducible games
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show how words are scored, pair by pair
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List the highest-scoring words in the lexicon
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Only rank words starting with this prefix
        #[arg(short, long)]
        prefix: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source = LexiconSource::new(cli.words, cli.freq);
    let lexicon = source.load().context("failed to load lexicon")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(&lexicon, seed),
        Commands::Score { words } => {
            for word in &words {
                print_score_report(&score_report(word, &lexicon));
            }
            Ok(())
        }
        Commands::Rank { count, prefix } => {
            let config = RankConfig {
                limit: count,
                prefix,
            };
            print_rank_result(&rank_words(&lexicon, &config));
            Ok(())
        }
    }
}

fn run_play_command(lexicon: &Lexicon, seed: Option<u64>) -> Result<()> {
    let engine = GameEngine::new(lexicon);
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = run_play(&engine, &mut rng, stdin.lock(), &mut stdout)?;

    tracing::info!(
        games = outcome.games,
        moves = outcome.moves,
        best_total = outcome.best_total,
        "play session finished"
    );
    Ok(())
}
