//! Risk assessment for successful plays.
//!
//! A play is risky when the acting player, going only by the hints they
//! received, could not rule out that the card was unplayable. The check
//! runs against the table as it stood before the play.

use crate::core::{Card, Rank};
use crate::knowledge::CardKnowledge;
use crate::zones::Table;

/// Was playing `card` a gamble for a player holding `knowledge` about it?
///
/// - color and rank known: never risky
/// - color known only: risky while more than one rank is still possible
/// - rank known only: risky if some still-possible color would not fit
///   the table with the card's rank
/// - neither known: risky if some still-possible (color, rank) pair would
///   not fit the table
///
/// ```
/// use hanabi_score::core::{Card, Hint, Rank};
/// use hanabi_score::knowledge::CardKnowledge;
/// use hanabi_score::rules::is_risky;
/// use hanabi_score::zones::Table;
///
/// let card: Card = "R1".parse().unwrap();
/// let table = Table::new();
///
/// // Told it is a 1: any 1 fits an empty table
/// let mut knowledge = CardKnowledge::new();
/// knowledge.confirm(Hint::Rank(Rank::MIN));
/// assert!(!is_risky(&knowledge, &card, &table));
///
/// // Nothing known: could have been a 5
/// assert!(is_risky(&CardKnowledge::new(), &card, &table));
/// ```
#[must_use]
pub fn is_risky(knowledge: &CardKnowledge, card: &Card, table: &Table) -> bool {
    match (knowledge.knows_color(), knowledge.knows_rank()) {
        (true, true) => false,
        (true, false) => knowledge.unknown_ranks().count() > 1,
        (false, true) => knowledge
            .unknown_colors()
            .any(|color| !table.can_play(&Card::new(color, card.rank))),
        (false, false) => {
            let ranks: Vec<Rank> = knowledge.unknown_ranks().collect();
            knowledge.unknown_colors().any(|color| {
                ranks
                    .iter()
                    .any(|&rank| !table.can_play(&Card::new(color, rank)))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Hint};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn rank(value: u8) -> Rank {
        Rank::new(value).unwrap()
    }

    #[test]
    fn test_fully_known_is_safe() {
        let mut knowledge = CardKnowledge::new();
        knowledge.confirm(Hint::Color(Color::Red));
        knowledge.confirm(Hint::Rank(rank(1)));

        assert!(!is_risky(&knowledge, &card("R1"), &Table::new()));
    }

    #[test]
    fn test_color_known_rank_open() {
        let mut knowledge = CardKnowledge::new();
        knowledge.confirm(Hint::Color(Color::Red));

        assert!(is_risky(&knowledge, &card("R1"), &Table::new()));

        // Ranks 2-5 eliminated: only 1 is left
        for r in 2..=5 {
            knowledge.exclude(Hint::Rank(rank(r)));
        }
        assert!(!is_risky(&knowledge, &card("R1"), &Table::new()));
    }

    #[test]
    fn test_color_known_ignores_table() {
        // Two ranks open is risky even though the table state is irrelevant
        let mut knowledge = CardKnowledge::new();
        knowledge.confirm(Hint::Color(Color::Green));
        for r in [3, 4, 5] {
            knowledge.exclude(Hint::Rank(rank(r)));
        }

        assert!(is_risky(&knowledge, &card("G1"), &Table::new()));
    }

    #[test]
    fn test_rank_known_depends_on_table() {
        let mut knowledge = CardKnowledge::new();
        knowledge.confirm(Hint::Rank(rank(2)));

        let mut table = Table::new();
        for color in Color::ALL {
            table.place(&Card::new(color, rank(1))).unwrap();
        }
        // Every color has its 1: any 2 fits
        assert!(!is_risky(&knowledge, &card("B2"), &table));

        // Only blue has its 1 here
        let mut partial = Table::new();
        partial.place(&card("B1")).unwrap();
        assert!(is_risky(&knowledge, &card("B2"), &partial));

        // Unless that color was already ruled out
        for color in [Color::Red, Color::Green, Color::Yellow, Color::White] {
            knowledge.exclude(Hint::Color(color));
        }
        assert!(!is_risky(&knowledge, &card("B2"), &partial));
    }

    #[test]
    fn test_nothing_known() {
        assert!(is_risky(&CardKnowledge::new(), &card("Y1"), &Table::new()));

        // Only 1s left and every color still needs its 1
        let mut knowledge = CardKnowledge::new();
        for r in 2..=5 {
            knowledge.exclude(Hint::Rank(rank(r)));
        }
        assert!(!is_risky(&knowledge, &card("Y1"), &Table::new()));

        // A played red 1 makes a red 1 unplayable
        let mut table = Table::new();
        table.place(&card("R1")).unwrap();
        assert!(is_risky(&knowledge, &card("Y1"), &table));
    }
}
