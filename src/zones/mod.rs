//! Card locations: the draw deck, the players' hands and the table.
//!
//! ## Key Types
//!
//! - `Deck`: ordered draw pile, drawn from the front
//! - `Hand`: a player's cards, each slot carrying the owner's knowledge
//! - `Table`: highest rank played per color

pub mod deck;
pub mod hand;
pub mod table;

pub use deck::Deck;
pub use hand::{Hand, Slot};
pub use table::Table;
