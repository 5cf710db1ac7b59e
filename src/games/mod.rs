//! Game implementations of `RulesEngine`.

pub mod hanabi;
