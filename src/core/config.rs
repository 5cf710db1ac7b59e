//! Game configuration.
//!
//! The fixed rules (five colors, ranks 1-5, two players) are constants in
//! the type system. `GameConfig` holds the remaining tunables:
//! - `hand_size`: cards dealt to each player at start (5)
//! - `min_deck_after_deal`: cards that must remain in the deck after dealing (1)
//! - `max_table_total`: table total at which the game is complete (25)

use serde::{Deserialize, Serialize};

use super::card::{COLOR_COUNT, RANK_COUNT};
use super::error::EngineError;
use super::player::PLAYER_COUNT;

/// Highest reachable table total: every color at its top rank.
pub const FULL_TABLE_TOTAL: u32 = (COLOR_COUNT * RANK_COUNT) as u32;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Cards that must remain in the deck after both hands are dealt.
    pub min_deck_after_deal: usize,

    /// Table total that ends the game.
    pub max_table_total: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            min_deck_after_deal: 1,
            max_table_total: FULL_TABLE_TOTAL,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt to each player.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set how many cards must remain in the deck after dealing.
    #[must_use]
    pub fn with_min_deck_after_deal(mut self, count: usize) -> Self {
        self.min_deck_after_deal = count;
        self
    }

    /// Set the table total that completes the game.
    #[must_use]
    pub fn with_max_table_total(mut self, total: u32) -> Self {
        self.max_table_total = total;
        self
    }

    /// Cards dealt into hands at start.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.hand_size * PLAYER_COUNT
    }

    /// Minimum number of cards a start command must carry.
    #[must_use]
    pub fn required_cards(&self) -> usize {
        self.dealt_cards() + self.min_deck_after_deal
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.hand_size == 0 {
            return Err(EngineError::InvalidConfig("hand_size must be positive".into()));
        }
        if self.min_deck_after_deal == 0 {
            return Err(EngineError::InvalidConfig(
                "min_deck_after_deal must be positive".into(),
            ));
        }
        if self.max_table_total == 0 || self.max_table_total > FULL_TABLE_TOTAL {
            return Err(EngineError::InvalidConfig(format!(
                "max_table_total must be within 1..={FULL_TABLE_TOTAL}"
            )));
        }
        Ok(())
    }
}
