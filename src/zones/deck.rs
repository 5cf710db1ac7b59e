//! The draw deck.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, EngineError, GameRng, Rank};

/// Copies of each rank in a standard deck, indexed by `Rank::index()`.
const STANDARD_COPIES: [usize; 5] = [3, 2, 2, 2, 1];

/// Ordered draw pile. Cards are drawn from the front (index 0).
///
/// Backed by `im::Vector` so cloning a game state stays cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck holding `cards`, front first.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The full 50-card composition, grouped by color then rank.
    ///
    /// ```
    /// use hanabi_score::zones::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 50);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Color::ALL.into_iter().flat_map(|color| {
            Rank::all().flat_map(move |rank| {
                std::iter::repeat(Card::new(color, rank)).take(STANDARD_COPIES[rank.index()])
            })
        }))
    }

    /// The standard composition shuffled by `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Self::standard().cards.into_iter().collect();
        rng.shuffle(&mut cards);
        Self::new(cards)
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop_front().ok_or(EngineError::EmptyDeck)
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck exhausted?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
