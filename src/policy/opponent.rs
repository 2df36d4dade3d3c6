//! Opponent policies and the scripted opponent turn.
//!
//! A policy only makes the two decisions the rules leave open: which
//! playable card to play and which color to name for a wild. The turn
//! structure itself (play, else draw and maybe play, else pass) is fixed
//! and lives in `take_turn`.

use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::cards::{Card, Color};
use crate::core::{rng, ActionResult, GameState, Phase, RandomSource, Rejection};
use crate::rules::{self, is_playable, playable_cards};

/// Decision policy for a scripted seat.
pub trait OpponentPolicy: Send + Sync {
    /// Choose one of `playable`, or `None` to draw instead.
    fn choose_card(&self, playable: &[Card], rng: &mut dyn RandomSource) -> Option<Card>;

    /// Name a color for a wild, given the hand left after playing it.
    fn choose_color(&self, remaining_hand: &[Card], rng: &mut dyn RandomSource) -> Color;
}

/// The standard scripted opponent.
///
/// Plays the highest-priority card (`wild draw four`, `wild`, `draw two`,
/// `skip`, `reverse`, then numerals), breaking ties by the card id's
/// textual form (`card-17` before `card-3`).
/// Names the color it holds most of, breaking ties at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn choose_card(&self, playable: &[Card], _rng: &mut dyn RandomSource) -> Option<Card> {
        playable
            .iter()
            .min_by_key(|card| (Reverse(card.value.opponent_priority()), card.id.to_string()))
            .copied()
    }

    fn choose_color(&self, remaining_hand: &[Card], rng: &mut dyn RandomSource) -> Color {
        let mut counts = [0usize; 4];
        for color in remaining_hand.iter().filter_map(|card| card.color.standard()) {
            counts[color.index()] += 1;
        }

        // With no colored cards left every count is zero and all four tie
        let best = counts.iter().copied().max().unwrap_or(0);
        let candidates: SmallVec<[Color; 4]> = Color::ALL
            .iter()
            .copied()
            .filter(|color| counts[color.index()] == best)
            .collect();

        rng::choose(rng, &candidates[..]).copied().unwrap_or(Color::Red)
    }
}

/// Uniform random opponent policy.
///
/// Plays a uniformly random playable card and names a uniformly random
/// color. Useful as a baseline in simulations.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_card(&self, playable: &[Card], rng: &mut dyn RandomSource) -> Option<Card> {
        rng::choose(rng, playable).copied()
    }

    fn choose_color(&self, _remaining_hand: &[Card], rng: &mut dyn RandomSource) -> Color {
        rng::choose(rng, &Color::ALL).copied().unwrap_or(Color::Red)
    }
}

/// Play one full turn for the active scripted seat with `policy`.
///
/// Plays a chosen card if any is playable; otherwise draws, plays the
/// drawn card if it can, and passes if not. Wilds always get their color
/// in the same step, so the result never waits in `choose-color`.
pub fn take_turn(
    policy: &dyn OpponentPolicy,
    state: &GameState,
    rng: &mut dyn RandomSource,
) -> ActionResult<GameState> {
    match state.phase {
        Phase::Playing => {}
        Phase::Finished => return Err(Rejection::GameFinished),
        phase => return Err(Rejection::WrongPhase(phase)),
    }
    if state.active_player().is_human {
        return Err(Rejection::HumanSeat);
    }

    let playable = playable_cards(state);
    if let Some(card) = policy.choose_card(&playable, rng) {
        log::trace!("{} chooses {} from {} playable", state.current_player, card, playable.len());
        return play_with_color(policy, state, card, rng);
    }

    let after_draw = rules::draw(state, rng)?;
    if let Some(&drawn) = after_draw.drawn_card() {
        if is_playable(&after_draw, &drawn) {
            log::trace!("{} plays the drawn {}", after_draw.current_player, drawn);
            return play_with_color(policy, &after_draw, drawn, rng);
        }
    }
    rules::pass(&after_draw)
}

/// Play one turn for the active scripted seat with `GreedyOpponent`.
pub fn take_opponent_turn(
    state: &GameState,
    rng: &mut dyn RandomSource,
) -> ActionResult<GameState> {
    take_turn(&GreedyOpponent, state, rng)
}

fn play_with_color(
    policy: &dyn OpponentPolicy,
    state: &GameState,
    card: Card,
    rng: &mut dyn RandomSource,
) -> ActionResult<GameState> {
    let color = if card.is_wild() {
        let remaining: Vec<Card> = state
            .active_player()
            .hand
            .iter()
            .filter(|c| c.id != card.id)
            .copied()
            .collect();
        Some(policy.choose_color(&remaining, rng))
    } else {
        None
    };
    rules::play(state, card.id, color, rng)
}

/// Drive scripted seats until the game ends, a human seat is up, or
/// `max_turns` opponent turns have been taken.
///
/// Stops early if a turn is rejected (both piles exhausted); the last
/// accepted state is returned either way.
pub fn play_out(
    policy: &dyn OpponentPolicy,
    state: &GameState,
    max_turns: usize,
    rng: &mut dyn RandomSource,
) -> GameState {
    let mut current = state.clone();
    for _ in 0..max_turns {
        if current.is_finished() || current.active_player().is_human {
            break;
        }
        match take_turn(policy, &current, rng) {
            Ok(next) => current = next,
            Err(reason) => {
                log::debug!("play out stopped at turn {}: {}", current.turn_count, reason);
                break;
            }
        }
    }
    current
}
