//! # hanabi-score
//!
//! Rule-checking simulator and scorer for two-player Hanabi turn logs.
//!
//! ## Design Principles
//!
//! 1. **Illegal moves are outcomes, not errors**: an unplayable card or a
//!    wrong hint ends the game and is reported like any other ending.
//!    `EngineError` is reserved for contract violations (bad indexes,
//!    acting on a finished game) and never changes state.
//!
//! 2. **Knowledge travels with the card**: each hand slot pairs a card with
//!    its owner's tri-state beliefs, so compacting a hand cannot desync them.
//!
//! 3. **Explicit ownership**: the `Session` owns the one game in progress;
//!    there is no global state.
//!
//! ## Modules
//!
//! - `core`: Cards, players, actions, state, errors, RNG, configuration
//! - `knowledge`: Per-card belief tables
//! - `zones`: Deck, hands and table
//! - `rules`: `RulesEngine` trait and risk assessment
//! - `games`: The Hanabi rules implementation
//! - `command`: Turn-log line parser
//! - `session`: Line-by-line driver and summaries
//! - `logging`: Diagnostic log setup for the binary

pub mod core;
pub mod knowledge;
pub mod zones;
pub mod rules;
pub mod games;
pub mod command;
pub mod session;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Bust, Card, Color, EngineError, GameConfig, GameRng, GameState,
    GameStats, Hint, ParseError, PlayerId, PlayerMap, Rank,
};

pub use crate::knowledge::{Belief, CardKnowledge};

pub use crate::zones::{Deck, Hand, Slot, Table};

pub use crate::rules::{is_risky, EndReason, GameResult, RulesEngine};

pub use crate::games::hanabi::HanabiGame;

pub use crate::command::{parse_command, Command};

pub use crate::session::{GameSummary, OutputFormat, Session, SessionError};
