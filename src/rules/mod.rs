//! Rules engine trait and the rule helpers shared by its implementation.
//!
//! Games implement `RulesEngine` to define:
//! - Which actions are well-formed in a state
//! - How actions modify state
//! - When the game is over, and why
//!
//! `risk` decides whether a successful play was a gamble from the acting
//! player's point of view.

pub mod engine;
pub mod risk;

pub use engine::{EndReason, GameResult, RulesEngine};
pub use risk::is_risky;
