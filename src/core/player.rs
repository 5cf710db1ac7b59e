//! The two seats and per-seat storage.
//!
//! A `PlayerId` can only name one of the two seats, so indexing a
//! `PlayerMap` with it never goes out of bounds.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// One of the two seats, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Moves first and receives the first five dealt cards.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Receives the second five dealt cards.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Seat by 0-based index; `None` past the second seat.
    #[must_use]
    pub const fn new(seat: u8) -> Option<Self> {
        if (seat as usize) < PLAYER_COUNT {
            Some(Self(seat))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use hanabi_score::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        Self::new(seat).ok_or_else(|| format!("no seat {seat} at a {PLAYER_COUNT}-player table"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Values for the first and second seat.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            seats: [first, second],
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}
