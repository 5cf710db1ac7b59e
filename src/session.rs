//! Turn-log session: reads commands, runs games, reports finished games.
//!
//! A `Session` owns at most one game in progress. After every line it
//! checks whether that game is over; if so the game is discarded and its
//! summary returned, ready for the next `Start` command.
//!
//! ## Example
//!
//! ```
//! use hanabi_score::games::hanabi::HanabiGame;
//! use hanabi_score::session::Session;
//!
//! let mut session = Session::new(HanabiGame::default());
//! assert!(session.process_line("Start new game with deck R1 G1 B1 W1 Y1 R2 G2 B2 W2 Y2 R3").is_none());
//!
//! let summary = session.process_line("Play card 0").unwrap();
//! assert_eq!(summary.to_string(), "Turn: 1, cards: 1, with risk: 1");
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::command::{parse_command, Command};
use crate::core::{Bust, GameState, GameStats};
use crate::games::hanabi::HanabiGame;
use crate::rules::{EndReason, GameResult, RulesEngine};

/// How finished games are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `Turn: N, cards: K, with risk: R`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Final statistics of a finished game.
///
/// As JSON: `{"turns":N,"cards":K,"risky":R,"reason":"..."}`, plus a
/// `bust` object naming the illegal move when `reason` is `"bust"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub turns: u32,
    pub cards: u32,
    pub risky: u32,
    pub reason: EndReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bust: Option<Bust>,
}

impl GameSummary {
    #[must_use]
    pub fn new(stats: GameStats, result: &GameResult) -> Self {
        Self {
            turns: stats.turns,
            cards: stats.cards_played,
            risky: stats.risky_turns,
            reason: result.reason(),
            bust: result.bust().cloned(),
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}, cards: {}, with risk: {}",
            self.turns, self.cards, self.risky
        )
    }
}

/// Failures while streaming a turn log.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Driver for a stream of games.
#[derive(Clone, Debug, Default)]
pub struct Session {
    rules: HanabiGame,
    game: Option<GameState>,
}

impl Session {
    /// Create a session with no game in progress.
    #[must_use]
    pub fn new(rules: HanabiGame) -> Self {
        Self { rules, game: None }
    }

    /// The game in progress, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Process one input line.
    ///
    /// Returns the summary of the game in progress if this line ended it.
    /// Lines that do not parse, turns with no game in progress and turns the
    /// engine rejects leave everything unchanged.
    pub fn process_line(&mut self, line: &str) -> Option<GameSummary> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, line, "ignoring line");
                return None;
            }
        };

        match command {
            Command::Start { cards } => match self.rules.deal(cards) {
                Ok(state) => {
                    if self.game.is_some() {
                        info!("unfinished game replaced by a new one");
                    }
                    self.game = Some(state);
                }
                Err(err) => {
                    warn!(%err, "start command rejected");
                    return None;
                }
            },
            Command::Act(action) => {
                let Some(state) = self.game.as_mut() else {
                    debug!(%action, "no game in progress");
                    return None;
                };
                if let Err(err) = self.rules.apply_action(state, &action) {
                    warn!(%err, %action, "action rejected");
                }
            }
        }

        self.finish_if_over()
    }

    /// Process every line of `input`, writing a summary for each finished
    /// game to `output`. Returns the number of finished games.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and, failing to
    /// parse, ignored.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        format: OutputFormat,
    ) -> Result<usize, SessionError> {
        let mut finished = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            if let Some(summary) = self.process_line(&line) {
                write_summary(&mut output, &summary, format)?;
                finished += 1;
            }
        }

        if self.game.is_some() {
            info!("input ended with a game in progress");
        }
        output.flush()?;
        Ok(finished)
    }

    fn finish_if_over(&mut self) -> Option<GameSummary> {
        let result = self.rules.is_terminal(self.game.as_ref()?)?;
        let state = self.game.take()?;

        let summary = GameSummary::new(state.stats, &result);
        info!(
            turns = summary.turns,
            cards = summary.cards,
            risky = summary.risky,
            %result,
            "game over"
        );
        Some(summary)
    }
}

fn write_summary<W: Write>(
    output: &mut W,
    summary: &GameSummary,
    format: OutputFormat,
) -> Result<(), SessionError> {
    match format {
        OutputFormat::Text => writeln!(output, "{summary}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, summary)?;
            writeln!(output)?;
        }
    }
    Ok(())
}
