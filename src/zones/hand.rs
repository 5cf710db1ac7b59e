//! A player's hand.
//!
//! Each slot pairs a card with what its owner knows about it, so removing a
//! card shifts its knowledge together with it.

use serde::{Deserialize, Serialize};

use crate::core::{Card, EngineError, HandIndexes, Hint};
use crate::knowledge::CardKnowledge;

/// One hand position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub knowledge: CardKnowledge,
}

impl Slot {
    /// A freshly drawn card: nothing known about it.
    #[must_use]
    pub fn fresh(card: Card) -> Self {
        Self {
            card,
            knowledge: CardKnowledge::new(),
        }
    }
}

/// Ordered cards in a player's hand, indexed from 0.
///
/// Removing a card compacts the hand: later slots move down by one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: Vec<Slot>,
}

impl Hand {
    /// A hand of freshly dealt cards.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            slots: cards.into_iter().map(Slot::fresh).collect(),
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check that `index` names a card in this hand.
    pub fn check_index(&self, index: usize) -> Result<(), EngineError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(EngineError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }

    /// Slot at `index`.
    pub fn slot(&self, index: usize) -> Result<&Slot, EngineError> {
        self.check_index(index)?;
        Ok(&self.slots[index])
    }

    /// Card at `index`.
    pub fn card(&self, index: usize) -> Result<Card, EngineError> {
        self.slot(index).map(|slot| slot.card)
    }

    /// Owner's knowledge about the card at `index`.
    pub fn knowledge(&self, index: usize) -> Result<&CardKnowledge, EngineError> {
        self.slot(index).map(|slot| &slot.knowledge)
    }

    /// Cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().map(|slot| slot.card)
    }

    /// Slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Remove the card at `index` together with its knowledge.
    pub fn remove(&mut self, index: usize) -> Result<Card, EngineError> {
        self.check_index(index)?;
        Ok(self.slots.remove(index).card)
    }

    /// Append a freshly drawn card.
    pub fn push(&mut self, card: Card) {
        self.slots.push(Slot::fresh(card));
    }

    /// Positions holding a card that matches `hint`, ascending.
    #[must_use]
    pub fn matching_positions(&self, hint: Hint) -> HandIndexes {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| hint.matches(&slot.card))
            .map(|(i, _)| i)
            .collect()
    }

    /// Apply a hint to the owner's knowledge.
    ///
    /// Indicated positions learn the value; all other positions learn they
    /// do not have it. Fails without touching anything if a position is out
    /// of range.
    pub fn record_hint(&mut self, hint: Hint, positions: &[usize]) -> Result<(), EngineError> {
        for &index in positions {
            self.check_index(index)?;
        }

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if positions.contains(&i) {
                slot.knowledge.confirm(hint);
            } else {
                slot.knowledge.exclude(hint);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Rank};
    use crate::knowledge::Belief;

    fn hand(text: &str) -> Hand {
        Hand::new(text.split_whitespace().map(|c| c.parse::<Card>().unwrap()))
    }

    #[test]
    fn test_remove_compacts() {
        let mut h = hand("R1 G2 B3 Y4 W5");

        assert_eq!(h.remove(1).unwrap().to_string(), "G2");
        assert_eq!(h.len(), 4);
        assert_eq!(h.card(1).unwrap().to_string(), "B3");
    }

    #[test]
    fn test_out_of_range() {
        let mut h = hand("R1 G2");

        assert_eq!(
            h.card(2),
            Err(EngineError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(h.remove(5).is_err());
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_knowledge_shifts_with_cards() {
        let mut h = hand("R1 G2 R3 Y4 W5");
        h.record_hint(Hint::Color(Color::Red), &[0, 2]).unwrap();

        h.remove(0).unwrap();

        // Former slot 2 (R3) is now slot 1 and keeps its knowledge
        assert_eq!(h.knowledge(1).unwrap().known_color(), Some(Color::Red));
        assert!(!h.knowledge(0).unwrap().knows_color());

        h.push("B1".parse().unwrap());
        assert_eq!(*h.knowledge(4).unwrap(), CardKnowledge::new());
    }

    #[test]
    fn test_record_hint_excludes_other_positions() {
        let mut h = hand("R1 G1 B2 Y1 W3");
        let one = Rank::new(1).unwrap();
        h.record_hint(Hint::Rank(one), &[0, 1, 3]).unwrap();

        for i in [0, 1, 3] {
            assert_eq!(h.knowledge(i).unwrap().known_rank(), Some(one));
        }
        for i in [2, 4] {
            let k = h.knowledge(i).unwrap();
            assert_eq!(k.rank(one), Belief::ConfirmedFalse);
            assert!(!k.knows_rank());
        }
    }

    #[test]
    fn test_record_hint_out_of_range_leaves_knowledge() {
        let mut h = hand("R1 G1");
        let before = h.clone();

        assert!(h.record_hint(Hint::Color(Color::Red), &[0, 7]).is_err());
        assert_eq!(h, before);
    }

    #[test]
    fn test_matching_positions() {
        let h = hand("R1 G1 R2 Y1 R5");

        assert_eq!(h.matching_positions(Hint::Color(Color::Red)).as_slice(), &[0, 2, 4]);
        assert_eq!(
            h.matching_positions(Hint::Rank(Rank::new(1).unwrap())).as_slice(),
            &[0, 1, 3]
        );
        assert!(h.matching_positions(Hint::Color(Color::White)).is_empty());
    }
}
