//! The shared table: highest rank played per color.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, EngineError, Rank, COLOR_COUNT};

/// Highest successfully played rank per color (0 = none yet).
///
/// Entries only grow, one step at a time.
///
/// ## Example
///
/// ```
/// use hanabi_score::core::Card;
/// use hanabi_score::zones::Table;
///
/// let mut table = Table::new();
/// let r1: Card = "R1".parse().unwrap();
/// let r2: Card = "R2".parse().unwrap();
///
/// assert!(!table.can_play(&r2));
/// table.place(&r1).unwrap();
/// assert!(table.can_play(&r2));
/// assert!(!table.can_play(&r1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    piles: [u8; COLOR_COUNT],
}

impl Table {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest rank played for `color`, 0 if none.
    #[must_use]
    pub fn height(&self, color: Color) -> u8 {
        self.piles[color.index()]
    }

    /// Can `card` extend its color's pile?
    #[must_use]
    pub fn can_play(&self, card: &Card) -> bool {
        card.rank.value() == self.height(card.color) + 1
    }

    /// Put `card` on its pile. The card must be playable.
    pub fn place(&mut self, card: &Card) -> Result<(), EngineError> {
        if !self.can_play(card) {
            return Err(EngineError::NotPlayable(*card));
        }
        self.piles[card.color.index()] += 1;
        Ok(())
    }

    /// Sum of all pile heights.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.piles.iter().map(|&h| u32::from(h)).sum()
    }

    /// Is every pile complete?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.piles.iter().all(|&h| h >= Rank::MAX.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_table_takes_ones_only() {
        let table = Table::new();

        for color in Color::ALL {
            assert!(table.can_play(&Card::new(color, Rank::MIN)));
            assert!(!table.can_play(&Card::new(color, Rank::MAX)));
        }
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_place_increments_by_one() {
        let mut table = Table::new();
        table.place(&card("G1")).unwrap();
        table.place(&card("G2")).unwrap();

        assert_eq!(table.height(Color::Green), 2);
        assert_eq!(table.height(Color::Red), 0);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_duplicates_and_gaps_not_playable() {
        let mut table = Table::new();
        table.place(&card("B1")).unwrap();

        assert!(!table.can_play(&card("B1")));
        assert!(!table.can_play(&card("B3")));
        assert_eq!(table.place(&card("B3")), Err(EngineError::NotPlayable(card("B3"))));
        assert_eq!(table.height(Color::Blue), 1);
    }

    #[test]
    fn test_full_table() {
        let mut table = Table::new();
        for color in Color::ALL {
            for rank in Rank::all() {
                assert!(!table.is_full());
                table.place(&Card::new(color, rank)).unwrap();
            }
        }

        assert!(table.is_full());
        assert_eq!(table.total(), 25);
    }
}
