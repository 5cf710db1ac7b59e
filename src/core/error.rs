//! Error types for the engine and the command parser.
//!
//! Illegal moves (unplayable cards, incomplete hints) are NOT errors: they
//! end the game and are reported through the summary. `EngineError` covers
//! contract violations only, and an operation that returns one leaves the
//! game state untouched.

use thiserror::Error;

use super::card::Card;

/// Contract violations raised by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("card index {index} out of range for hand of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("game is already over")]
    GameOver,

    #[error("card {0} cannot be placed on the table")]
    NotPlayable(Card),

    #[error("deal needs at least {required} cards but got {cards}")]
    InvalidDeal { cards: usize, required: usize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

/// Reasons a line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line matches no known command")]
    UnknownCommand,

    #[error("invalid card {0:?}")]
    InvalidCard(String),

    #[error("invalid card index {0:?}")]
    InvalidIndex(String),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("invalid rank {0:?}")]
    InvalidRank(String),

    #[error("hint names no cards")]
    MissingIndexes,
}
