//! Two-player Hanabi as scored from a turn log.
//!
//! - Each player holds 5 cards they cannot see; the other player can
//! - On your turn: play a card, drop a card, or give a hint
//! - A play must extend its color's pile by exactly one rank
//! - A hint must name every card of the hinted color or rank, and only those
//! - An unplayable card or a wrong hint busts the game
//! - The game also ends when the deck runs out or the table is complete

mod game;

pub use game::HanabiGame;
