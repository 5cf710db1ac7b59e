//! Hanabi turn-log scorer - CLI
//!
//! Reads a turn log (one command per line), checks every move against the
//! rules and prints `Turn: N, cards: K, with risk: R` for each finished game.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use hanabi_score::core::{GameConfig, GameRng};
use hanabi_score::games::hanabi::HanabiGame;
use hanabi_score::logging::init_logging;
use hanabi_score::session::{OutputFormat, Session};
use hanabi_score::zones::Deck;

#[derive(Parser)]
#[command(
    name = "hanabi-score",
    about = "Rule-checking scorer for two-player Hanabi turn logs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Diagnostic log level on stderr (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a turn log (default)
    Score {
        /// Read the log from this file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Summary format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print a start command with a shuffled full deck
    Deal {
        /// Shuffle seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let command = cli.command.unwrap_or(Commands::Score {
        input: None,
        format: OutputFormat::Text,
    });

    match command {
        Commands::Score { input, format } => run_score_command(input, format),
        Commands::Deal { seed } => {
            run_deal_command(seed);
            Ok(())
        }
    }
}

fn run_score_command(input: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let rules = HanabiGame::new(GameConfig::default())?;
    let mut session = Session::new(rules);
    let stdout = io::stdout().lock();

    let finished = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("opening turn log {}", path.display()))?;
            session.run(BufReader::new(file), stdout, format)
        }
        None => session.run(io::stdin().lock(), stdout, format),
    }
    .context("scoring turn log")?;

    tracing::info!(finished, "turn log processed");
    Ok(())
}

fn run_deal_command(seed: u64) {
    let deck = Deck::shuffled(&mut GameRng::new(seed));
    let cards: Vec<String> = deck.iter().map(ToString::to_string).collect();
    println!("Start new game with deck {}", cards.join(" "));
}
