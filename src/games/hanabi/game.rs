//! Hanabi rules implementation.

use tracing::{debug, info};

use crate::core::{
    Action, ActionRecord, Bust, Card, Color, EngineError, GameConfig, GameState, HandIndexes,
    Hint, Rank,
};
use crate::rules::{is_risky, GameResult, RulesEngine};
use crate::zones::{Deck, Hand};

/// Hanabi rules for a given configuration.
///
/// Holds no per-game data; the same value can deal and run any number of
/// games, one `GameState` each.
#[derive(Clone, Debug, Default)]
pub struct HanabiGame {
    config: GameConfig,
}

impl HanabiGame {
    /// Create the rules for `config`, rejecting unusable configurations.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Deal a new game from `cards` in order.
    ///
    /// The first `hand_size` cards go to the first player, the next
    /// `hand_size` to the second, the rest form the deck (front first).
    pub fn deal(&self, cards: Vec<Card>) -> Result<GameState, EngineError> {
        let required = self.config.required_cards();
        if cards.len() < required {
            return Err(EngineError::InvalidDeal {
                cards: cards.len(),
                required,
            });
        }

        let hand_size = self.config.hand_size;
        let mut cards = cards.into_iter();
        let first = Hand::new(cards.by_ref().take(hand_size));
        let second = Hand::new(cards.by_ref().take(hand_size));
        let deck = Deck::new(cards);

        info!(deck = deck.len(), "new game dealt");
        Ok(GameState::new(first, second, deck))
    }

    fn play(&self, state: &mut GameState, index: usize) -> Result<(), EngineError> {
        let player = state.current_player;
        let card = state.hands[player].card(index)?;

        if !state.table.can_play(&card) {
            info!(%player, %card, "unplayable card, game busts");
            state.bust = Some(Bust::UnplayableCard(card));
            return Ok(());
        }

        let risky = is_risky(state.hands[player].knowledge(index)?, &card, &state.table);
        let replacement = state.deck.draw()?;

        let hand = &mut state.hands[player];
        hand.remove(index)?;
        hand.push(replacement);
        state.table.place(&card)?;

        state.stats.cards_played += 1;
        if risky {
            state.stats.risky_turns += 1;
        }
        debug!(%player, %card, risky, "card played");
        Ok(())
    }

    fn drop_card(&self, state: &mut GameState, index: usize) -> Result<(), EngineError> {
        let player = state.current_player;
        state.hands[player].check_index(index)?;
        let replacement = state.deck.draw()?;

        let hand = &mut state.hands[player];
        let card = hand.remove(index)?;
        hand.push(replacement);

        debug!(%player, %card, "card dropped");
        Ok(())
    }

    fn tell(&self, state: &mut GameState, hint: Hint, indexes: &[usize]) -> Result<(), EngineError> {
        let receiver = state.current_player.other();
        let hand = &state.hands[receiver];
        for &index in indexes {
            hand.check_index(index)?;
        }

        let mut named: HandIndexes = indexes.iter().copied().collect();
        named.sort_unstable();

        if named.is_empty() || named != hand.matching_positions(hint) {
            info!(%receiver, %hint, ?indexes, "invalid hint, game busts");
            state.bust = Some(Bust::InvalidHint {
                hint,
                indexes: indexes.iter().copied().collect(),
            });
            return Ok(());
        }

        state.hands[receiver].record_hint(hint, indexes)?;
        debug!(%receiver, %hint, ?indexes, "hint given");
        Ok(())
    }
}

impl RulesEngine for HanabiGame {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if self.is_over(state) {
            return vec![];
        }

        let own = state.current_hand().len();
        let mut actions: Vec<Action> = (0..own)
            .map(|index| Action::Play { index })
            .chain((0..own).map(|index| Action::Drop { index }))
            .collect();

        let other = state.other_hand();
        for color in Color::ALL {
            let positions = other.matching_positions(Hint::Color(color));
            if !positions.is_empty() {
                actions.push(Action::tell_color(color, &positions));
            }
        }
        for rank in Rank::all() {
            let positions = other.matching_positions(Hint::Rank(rank));
            if !positions.is_empty() {
                actions.push(Action::tell_rank(rank, &positions));
            }
        }

        actions
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<(), EngineError> {
        if self.is_over(state) {
            return Err(EngineError::GameOver);
        }

        let player = state.current_player;
        match action {
            Action::Play { index } => self.play(state, *index)?,
            Action::Drop { index } => self.drop_card(state, *index)?,
            Action::TellColor { color, indexes } => self.tell(state, Hint::Color(*color), indexes)?,
            Action::TellRank { rank, indexes } => self.tell(state, Hint::Rank(*rank), indexes)?,
        }

        let turn = state.stats.turns + 1;
        state.end_turn(ActionRecord::new(player, action.clone(), turn));
        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if let Some(bust) = &state.bust {
            Some(GameResult::Bust(bust.clone()))
        } else if state.table.total() >= self.config.max_table_total {
            Some(GameResult::TableComplete)
        } else if state.deck.is_empty() {
            Some(GameResult::DeckExhausted)
        } else {
            None
        }
    }
}
