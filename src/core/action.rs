//! Action representation.
//!
//! A turn is one of four actions:
//! - `Play` a card from your own hand onto the table
//! - `Drop` a card from your own hand
//! - `TellColor` / `TellRank`: point at cards in the other player's hand
//!
//! Card indexes always refer to positions in a hand at the moment the
//! action is applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Color, Rank};
use super::player::PlayerId;

/// Hand positions named by a hint.
///
/// SmallVec keeps a full hand's worth of indexes inline.
pub type HandIndexes = SmallVec<[usize; 5]>;

/// The information a hint reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    Color(Color),
    Rank(Rank),
}

impl Hint {
    /// Does `card` carry the hinted value?
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            Hint::Color(color) => card.color == color,
            Hint::Rank(rank) => card.rank == rank,
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Color(color) => write!(f, "color {color}"),
            Hint::Rank(rank) => write!(f, "rank {rank}"),
        }
    }
}

/// A complete turn action.
///
/// ## Example
///
/// ```
/// use hanabi_score::core::{Action, Color, Hint};
///
/// let play = Action::Play { index: 0 };
/// assert!(play.hint().is_none());
///
/// let tell = Action::tell_color(Color::Red, &[1, 3]);
/// let (hint, indexes) = tell.hint().unwrap();
/// assert_eq!(hint, Hint::Color(Color::Red));
/// assert_eq!(indexes, &[1, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the acting player's card at `index`.
    Play { index: usize },

    /// Drop the acting player's card at `index`.
    Drop { index: usize },

    /// Tell the other player which of their cards have `color`.
    TellColor { color: Color, indexes: HandIndexes },

    /// Tell the other player which of their cards have `rank`.
    TellRank { rank: Rank, indexes: HandIndexes },
}

impl Action {
    /// Create a color hint.
    #[must_use]
    pub fn tell_color(color: Color, indexes: &[usize]) -> Self {
        Action::TellColor {
            color,
            indexes: SmallVec::from_slice(indexes),
        }
    }

    /// Create a rank hint.
    #[must_use]
    pub fn tell_rank(rank: Rank, indexes: &[usize]) -> Self {
        Action::TellRank {
            rank,
            indexes: SmallVec::from_slice(indexes),
        }
    }

    /// The hint carried by this action, if it is one.
    #[must_use]
    pub fn hint(&self) -> Option<(Hint, &[usize])> {
        match self {
            Action::TellColor { color, indexes } => Some((Hint::Color(*color), indexes.as_slice())),
            Action::TellRank { rank, indexes } => Some((Hint::Rank(*rank), indexes.as_slice())),
            Action::Play { .. } | Action::Drop { .. } => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play { index } => write!(f, "play {index}"),
            Action::Drop { index } => write!(f, "drop {index}"),
            Action::TellColor { color, indexes } => {
                write!(f, "tell color {color} for {:?}", indexes.as_slice())
            }
            Action::TellRank { rank, indexes } => {
                write!(f, "tell rank {rank} for {:?}", indexes.as_slice())
            }
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (1-based).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
