//! Per-card belief tables.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Hint, Rank, COLOR_COUNT, RANK_COUNT};

/// Belief about one value of one dimension of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Belief {
    /// Nothing is known yet.
    #[default]
    Unknown,
    /// The card is known to have this value.
    ConfirmedTrue,
    /// The card is known NOT to have this value.
    ConfirmedFalse,
}

/// Knowledge a player holds about a single card in their hand.
///
/// Fixed-size tables indexed by `Color::index()` and `Rank::index()`.
/// At most one entry per dimension is `ConfirmedTrue`, and when one is,
/// every other entry of that dimension is `ConfirmedFalse`.
///
/// ## Example
///
/// ```
/// use hanabi_score::core::{Color, Hint};
/// use hanabi_score::knowledge::CardKnowledge;
///
/// let mut knowledge = CardKnowledge::new();
/// knowledge.exclude(Hint::Color(Color::Red));
/// assert!(!knowledge.knows_color());
/// assert_eq!(knowledge.unknown_colors().count(), 4);
///
/// knowledge.confirm(Hint::Color(Color::Blue));
/// assert!(knowledge.knows_color());
/// assert_eq!(knowledge.known_color(), Some(Color::Blue));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKnowledge {
    colors: [Belief; COLOR_COUNT],
    ranks: [Belief; RANK_COUNT],
}

impl CardKnowledge {
    /// Fresh knowledge: every value unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Belief about `color`.
    #[must_use]
    pub fn color(&self, color: Color) -> Belief {
        self.colors[color.index()]
    }

    /// Belief about `rank`.
    #[must_use]
    pub fn rank(&self, rank: Rank) -> Belief {
        self.ranks[rank.index()]
    }

    /// Record that the card carries the hinted value.
    pub fn confirm(&mut self, hint: Hint) {
        match hint {
            Hint::Color(color) => confirm_in(&mut self.colors, color.index()),
            Hint::Rank(rank) => confirm_in(&mut self.ranks, rank.index()),
        }
    }

    /// Record that the card does not carry the hinted value.
    pub fn exclude(&mut self, hint: Hint) {
        match hint {
            Hint::Color(color) => self.colors[color.index()] = Belief::ConfirmedFalse,
            Hint::Rank(rank) => self.ranks[rank.index()] = Belief::ConfirmedFalse,
        }
    }

    /// Is the color confirmed?
    #[must_use]
    pub fn knows_color(&self) -> bool {
        self.colors.contains(&Belief::ConfirmedTrue)
    }

    /// Is the rank confirmed?
    #[must_use]
    pub fn knows_rank(&self) -> bool {
        self.ranks.contains(&Belief::ConfirmedTrue)
    }

    /// Are both color and rank confirmed?
    #[must_use]
    pub fn knows_card(&self) -> bool {
        self.knows_color() && self.knows_rank()
    }

    /// The confirmed color, if any.
    #[must_use]
    pub fn known_color(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| self.color(*c) == Belief::ConfirmedTrue)
    }

    /// The confirmed rank, if any.
    #[must_use]
    pub fn known_rank(&self) -> Option<Rank> {
        Rank::all().find(|r| self.rank(*r) == Belief::ConfirmedTrue)
    }

    /// Colors still `Unknown`.
    pub fn unknown_colors(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL
            .into_iter()
            .filter(|c| self.color(*c) == Belief::Unknown)
    }

    /// Ranks still `Unknown`.
    pub fn unknown_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::all().filter(|r| self.rank(*r) == Belief::Unknown)
    }
}

fn confirm_in(beliefs: &mut [Belief], confirmed: usize) {
    for (i, belief) in beliefs.iter_mut().enumerate() {
        *belief = if i == confirmed {
            Belief::ConfirmedTrue
        } else {
            Belief::ConfirmedFalse
        };
    }
}
