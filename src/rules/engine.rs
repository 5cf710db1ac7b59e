//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are well-formed
//! - How actions modify state
//! - End conditions

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::error::EngineError;
use crate::core::state::{Bust, GameState};

/// Why a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// An illegal play or hint.
    Bust(Bust),
    /// The table reached its maximum total.
    TableComplete,
    /// The deck ran out.
    DeckExhausted,
}

/// The kind of ending, without bust details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    Bust,
    TableComplete,
    DeckExhausted,
}

impl GameResult {
    /// Did the game end on an illegal move?
    #[must_use]
    pub fn is_bust(&self) -> bool {
        matches!(self, GameResult::Bust(_))
    }

    #[must_use]
    pub fn reason(&self) -> EndReason {
        match self {
            GameResult::Bust(_) => EndReason::Bust,
            GameResult::TableComplete => EndReason::TableComplete,
            GameResult::DeckExhausted => EndReason::DeckExhausted,
        }
    }

    /// The illegal move, if the game busted.
    #[must_use]
    pub fn bust(&self) -> Option<&Bust> {
        match self {
            GameResult::Bust(bust) => Some(bust),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Bust(bust) => write!(f, "bust: {bust}"),
            GameResult::TableComplete => f.write_str("table complete"),
            GameResult::DeckExhausted => f.write_str("deck exhausted"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: on `Err`, the state must be left exactly as it was
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Well-formed actions for the player to move.
    ///
    /// Plays are listed for every slot even though some of them bust.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the player to move.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<(), EngineError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Has the game ended?
    fn is_over(&self, state: &GameState) -> bool {
        self.is_terminal(state).is_some()
    }
}
