//! Card values: colors, ranks and the immutable `Card` pair.
//!
//! ## Text form
//!
//! A card is written as its color letter followed by its rank digit,
//! e.g. `R3` or `W5`. Colors in hint commands use their full name
//! (`Red`, `Green`, `Blue`, `Yellow`, `White`).
//!
//! ```
//! use hanabi_score::core::{Card, Color, Rank};
//!
//! let card: Card = "G4".parse().unwrap();
//! assert_eq!(card.color, Color::Green);
//! assert_eq!(card.rank, Rank::new(4).unwrap());
//! assert_eq!(card.to_string(), "G4");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Number of card colors.
pub const COLOR_COUNT: usize = 5;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 5;

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl Color {
    /// All colors, in index order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
    ];

    /// Dense index (0-based) used for fixed-size per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used in card text.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::White => 'W',
        }
    }

    /// Full name used in hint commands.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }

    /// Look up a color by its card letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }

    /// Look up a color by its full name (case-sensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::InvalidColor(s.to_string()))
    }
}

/// Card rank, always within `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank.
    pub const MIN: Rank = Rank(1);

    /// Highest rank.
    pub const MAX: Rank = Rank(RANK_COUNT as u8);

    /// Create a rank, rejecting values outside `1..=5`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= RANK_COUNT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Dense index (0-based) used for fixed-size per-rank arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all ranks, lowest first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANK_COUNT as u8).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| ParseError::InvalidRank(value.to_string()))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) => digit.to_digit(10).and_then(|d| Rank::new(d as u8)),
            _ => None,
        }
        .ok_or_else(|| ParseError::InvalidRank(s.to_string()))
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let color = Color::from_letter(letter).ok_or_else(invalid)?;
        let rank = digit
            .to_digit(10)
            .and_then(|d| Rank::new(d as u8))
            .ok_or_else(invalid)?;

        Ok(Card::new(color, rank))
    }
}
