//! Line parser.
//!
//! ## Grammar
//!
//! ```text
//! Start new game with deck <card> <card> ...
//! Play card <index>
//! Drop card <index>
//! Tell color <Red|Green|Blue|Yellow|White> for cards <index> <index> ...
//! Tell rank <1-5> for cards <index> <index> ...
//! ```
//!
//! Keywords are case-sensitive. Tokens are separated by whitespace and the
//! whole line must match; anything else is `ParseError::UnknownCommand`.

use crate::core::{Action, Card, Color, HandIndexes, ParseError, Rank};

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deal a new game from these cards, in order.
    Start { cards: Vec<Card> },

    /// A turn in the current game.
    Act(Action),
}

/// Parse one input line.
///
/// ```
/// use hanabi_score::command::{parse_command, Command};
/// use hanabi_score::core::{Action, Color};
///
/// assert_eq!(
///     parse_command("Tell color Red for cards 0 3"),
///     Ok(Command::Act(Action::tell_color(Color::Red, &[0, 3])))
/// );
/// assert!(parse_command("Play card x").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["Start", "new", "game", "with", "deck", cards @ ..] if !cards.is_empty() => {
            let cards = cards
                .iter()
                .map(|text| text.parse::<Card>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Start { cards })
        }
        ["Play", "card", index] => Ok(Command::Act(Action::Play {
            index: parse_index(index)?,
        })),
        ["Drop", "card", index] => Ok(Command::Act(Action::Drop {
            index: parse_index(index)?,
        })),
        ["Tell", "color", color, "for", "cards", indexes @ ..] => {
            Ok(Command::Act(Action::TellColor {
                color: color.parse::<Color>()?,
                indexes: parse_indexes(indexes)?,
            }))
        }
        ["Tell", "rank", rank, "for", "cards", indexes @ ..] => {
            Ok(Command::Act(Action::TellRank {
                rank: rank.parse::<Rank>()?,
                indexes: parse_indexes(indexes)?,
            }))
        }
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Decimal digits only: no sign, no whitespace.
fn parse_index(text: &str) -> Result<usize, ParseError> {
    let invalid = || ParseError::InvalidIndex(text.to_string());

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

fn parse_indexes(texts: &[&str]) -> Result<HandIndexes, ParseError> {
    if texts.is_empty() {
        return Err(ParseError::MissingIndexes);
    }
    texts.iter().map(|text| parse_index(text)).collect()
}
