//! What each player knows about their own cards.
//!
//! Players never see their own hand. Everything they know comes from hints:
//! a hint confirms a value on the indicated cards and rules that value out
//! on every other card in the hand. Knowledge is tracked per hand slot as a
//! tri-state belief for every color and every rank, so that values can be
//! eliminated one by one.

mod card_knowledge;

pub use card_knowledge::{Belief, CardKnowledge};
