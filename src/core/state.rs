//! Game state.
//!
//! ## GameState
//!
//! Everything a game in progress consists of:
//! - Deck, table and both hands (with per-slot knowledge)
//! - Whose turn it is
//! - Running statistics
//! - The bust that ended the game, if any
//! - Action history
//!
//! Whether the game is over also depends on the deck and table, so it is
//! decided by the rules engine (`RulesEngine::is_terminal`), not stored.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, HandIndexes, Hint};
use super::card::Card;
use super::player::{PlayerId, PlayerMap};
use crate::zones::{Deck, Hand, Table};

/// Running counters reported when a game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    /// Turns taken, including a turn that busted.
    pub turns: u32,

    /// Cards successfully played onto the table.
    pub cards_played: u32,

    /// Successful plays the acting player could not have been sure of.
    pub risky_turns: u32,
}

/// An illegal move that ended the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bust {
    /// A card that does not extend its pile was played.
    UnplayableCard(Card),

    /// A hint named a wrong card or missed a matching one.
    InvalidHint { hint: Hint, indexes: HandIndexes },
}

impl std::fmt::Display for Bust {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bust::UnplayableCard(card) => write!(f, "unplayable card {card}"),
            Bust::InvalidHint { hint, indexes } => {
                write!(f, "invalid hint {hint} for {:?}", indexes.as_slice())
            }
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw pile.
    pub deck: Deck,

    /// Played piles.
    pub table: Table,

    /// Both hands, with the owner's knowledge per slot.
    pub hands: PlayerMap<Hand>,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Running statistics.
    pub stats: GameStats,

    /// Set when an illegal move ends the game.
    pub bust: Option<Bust>,

    /// Every applied action, oldest first.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state from dealt hands and the remaining deck.
    ///
    /// The first player moves first.
    #[must_use]
    pub fn new(first: Hand, second: Hand, deck: Deck) -> Self {
        Self {
            deck,
            table: Table::new(),
            hands: PlayerMap::from_pair(first, second),
            current_player: PlayerId::FIRST,
            stats: GameStats::default(),
            bust: None,
            history: Vector::new(),
        }
    }

    /// Hand of the player to move.
    #[must_use]
    pub fn current_hand(&self) -> &Hand {
        &self.hands[self.current_player]
    }

    /// Hand of the player waiting.
    #[must_use]
    pub fn other_hand(&self) -> &Hand {
        &self.hands[self.current_player.other()]
    }

    /// Has an illegal move been made?
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.bust.is_some()
    }

    /// Close the current turn: record it, pass to the other player.
    pub fn end_turn(&mut self, record: ActionRecord) {
        self.history.push_back(record);
        self.current_player = self.current_player.other();
        self.stats.turns += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;

    fn cards(text: &str) -> Vec<Card> {
        text.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn state() -> GameState {
        GameState::new(
            Hand::new(cards("R1 R2 R3 R4 R5")),
            Hand::new(cards("G1 G2 G3 G4 G5")),
            Deck::new(cards("B1")),
        )
    }

    #[test]
    fn test_new_state() {
        let state = state();

        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.current_hand().card(0).unwrap().to_string(), "R1");
        assert_eq!(state.other_hand().card(0).unwrap().to_string(), "G1");
        assert_eq!(state.stats, GameStats::default());
        assert!(!state.is_busted());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_end_turn_alternates() {
        let mut state = state();

        state.end_turn(ActionRecord::new(PlayerId::FIRST, Action::Drop { index: 0 }, 1));
        assert_eq!(state.current_player, PlayerId::SECOND);
        assert_eq!(state.stats.turns, 1);

        state.end_turn(ActionRecord::new(PlayerId::SECOND, Action::Drop { index: 0 }, 2));
        assert_eq!(state.current_player, PlayerId::FIRST);
        assert_eq!(state.stats.turns, 2);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn test_bust_display() {
        let bust = Bust::UnplayableCard("W4".parse().unwrap());
        assert_eq!(bust.to_string(), "unplayable card W4");
    }
}
