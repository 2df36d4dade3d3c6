//! The standard rules as a `RulesEngine`.

use crate::cards::Color;
use crate::core::{Action, ActionResult, GameConfig, GameState, InitError, Phase, RandomSource};

use super::engine::{GameResult, RulesEngine};
use super::turn;

/// Standard rules over a fixed table configuration.
#[derive(Clone, Debug, Default)]
pub struct UnoRules {
    config: GameConfig,
}

impl UnoRules {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for UnoRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn new_game(&self, rng: &mut dyn RandomSource) -> Result<GameState, InitError> {
        turn::initialize(&self.config, rng)
    }

    /// Wild plays are listed once, without a color; the color follows as a
    /// separate `SelectColor` action.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        match state.phase {
            Phase::Finished => Vec::new(),
            Phase::ChooseColor => Color::ALL.iter().map(|&c| Action::SelectColor(c)).collect(),
            Phase::Playing => {
                let mut actions: Vec<Action> = turn::playable_cards(state)
                    .into_iter()
                    .map(|card| Action::play(card.id))
                    .collect();
                if !state.draw_pile.is_empty() || state.discard_pile.len() > 1 {
                    actions.push(Action::Draw);
                }
                if state.drawn_card_id.is_some() {
                    actions.push(Action::Pass);
                }
                actions
            }
        }
    }

    fn apply_action(
        &self,
        state: &GameState,
        action: &Action,
        rng: &mut dyn RandomSource,
    ) -> ActionResult<GameState> {
        turn::apply(state, action, rng)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match (state.phase, state.winner_id) {
            (Phase::Finished, Some(winner)) => Some(GameResult { winner }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, CardValue};
    use crate::core::{GameRng, Leftovers, PlayerId, SequenceRng, TableSetup};

    const RED: CardColor = CardColor::Standard(Color::Red);
    const GREEN: CardColor = CardColor::Standard(Color::Green);

    #[test]
    fn test_new_game_uses_config() {
        let rules = UnoRules::new(GameConfig::two_player());
        let state = rules.new_game(&mut GameRng::new(3)).unwrap();
        assert_eq!(state.player_count(), 2);
        assert!(rules.is_terminal(&state).is_none());
    }

    #[test]
    fn test_legal_actions_playing() {
        let rules = UnoRules::default();
        let state = TableSetup::new(2)
            .hand(0, &[(RED, CardValue::Number(1)), (GREEN, CardValue::Number(2))])
            .discard_top(RED, CardValue::Number(5))
            .build();
        let red = state.players[PlayerId::new(0)].hand[0];

        assert_eq!(rules.legal_actions(&state), vec![Action::play(red.id), Action::Draw]);
    }

    #[test]
    fn test_legal_actions_after_draw() {
        let rules = UnoRules::default();
        let state = TableSetup::new(2)
            .hand(0, &[(RED, CardValue::Number(1))])
            .draw_pile_top(&[(GREEN, CardValue::Number(9))])
            .discard_top(RED, CardValue::Number(5))
            .build();

        let drawn = rules.apply_action(&state, &Action::Draw, &mut SequenceRng::zeros()).unwrap();
        // The red 1 is no longer playable, and the green 9 does not match
        assert_eq!(rules.legal_actions(&drawn), vec![Action::Draw, Action::Pass]);
        assert!(rules.is_legal(&drawn, &Action::Pass));
        assert!(!rules.is_legal(&state, &Action::Pass));
    }

    #[test]
    fn test_legal_actions_choose_color() {
        let rules = UnoRules::default();
        let mut state = TableSetup::new(2)
            .hand(0, &[(CardColor::Wild, CardValue::Wild), (RED, CardValue::Number(1))])
            .build();
        let wild = state.players[PlayerId::new(0)].hand[0];
        state = rules
            .apply_action(&state, &Action::play(wild.id), &mut SequenceRng::zeros())
            .unwrap();

        let actions = rules.legal_actions(&state);
        assert_eq!(actions.len(), 4);
        assert!(actions.iter().all(|a| matches!(a, Action::SelectColor(_))));
    }

    #[test]
    fn test_no_draw_when_exhausted() {
        let rules = UnoRules::default();
        let state = TableSetup::new(2).leftovers(Leftovers::Hand(1)).build();
        assert!(rules.legal_actions(&state).is_empty());
    }

    #[test]
    fn test_terminal_after_win() {
        let rules = UnoRules::default();
        let state = TableSetup::new(2)
            .hand(0, &[(RED, CardValue::Number(1))])
            .discard_top(RED, CardValue::Number(5))
            .build();
        let card = state.players[PlayerId::new(0)].hand[0];

        let done = rules
            .apply_action(&state, &Action::play(card.id), &mut SequenceRng::zeros())
            .unwrap();
        assert_eq!(
            rules.is_terminal(&done),
            Some(GameResult {
                winner: PlayerId::new(0)
            })
        );
        assert!(rules.legal_actions(&done).is_empty());
    }
}
