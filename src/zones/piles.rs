//! Draw pile upkeep: lazy recycling of the discard pile and dealing.
//!
//! These helpers mutate a working copy of the state. Callers clone the
//! snapshot first, so the caller-visible state is never touched.

use crate::cards::{shuffle_cards, Card};
use crate::core::{GameState, PlayerId, RandomSource};

/// Refill an empty draw pile from the discard pile.
///
/// Keeps the top discard in place and shuffles the rest into a new draw
/// pile. Does nothing if the draw pile still has cards or the discard
/// pile holds at most one card. Returns whether a recycle happened.
pub fn ensure_draw_pile(state: &mut GameState, rng: &mut dyn RandomSource) -> bool {
    if !state.draw_pile.is_empty() || state.discard_pile.len() <= 1 {
        return false;
    }

    let top = state.discard_pile.split_off(state.discard_pile.len() - 1);
    let rest = std::mem::replace(&mut state.discard_pile, top);
    state.draw_pile = shuffle_cards(&rest, rng);

    log::trace!(
        "recycled {} discards into the draw pile",
        state.draw_pile.len()
    );
    true
}

/// Take the top card of the draw pile, recycling first if needed.
///
/// Returns `None` when both piles are exhausted.
pub fn draw_top(state: &mut GameState, rng: &mut dyn RandomSource) -> Option<Card> {
    ensure_draw_pile(state, rng);
    state.draw_pile.pop_front()
}

/// Move up to `count` cards from the draw pile into `seat`'s hand.
///
/// Stops early if the piles run dry. Returns the number of cards dealt.
pub fn deal(
    state: &mut GameState,
    seat: PlayerId,
    count: usize,
    rng: &mut dyn RandomSource,
) -> usize {
    for dealt in 0..count {
        match draw_top(state, rng) {
            Some(card) => state.players[seat].receive(card),
            None => return dealt,
        }
    }
    count
}
