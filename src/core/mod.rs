//! Core types: cards, players, actions, state, errors, RNG, configuration.
//!
//! Everything here is plain data with no game-flow logic; the rules live in
//! `rules` and `games`.

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use card::{Card, Color, Rank, COLOR_COUNT, RANK_COUNT};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{GameConfig, FULL_TABLE_TOTAL};
pub use action::{Action, ActionRecord, HandIndexes, Hint};
pub use error::{EngineError, ParseError};
pub use state::{Bust, GameState, GameStats};
