//! Effect resolution: direction, skips and forced draws.
//!
//! The resolver runs once per played card and once for the starter. It
//! mutates a working copy of the state (direction, hands, piles, log) and
//! returns the seat that should act next. It never touches the turn
//! pointer itself, because a wild may still suspend play for a color.

use crate::cards::Card;
use crate::core::{GameState, PlayerId, RandomSource};
use crate::zones;

use super::CardEffect;

/// Who a card's effect is resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectSource {
    /// The starter card revealed at setup, played by no one.
    Starter,
    /// A card played from this seat's hand.
    Seat(PlayerId),
}

/// Resolves card effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `card`'s effect and return the next seat to act.
    ///
    /// The starter is resolved relative to the current seat and does not
    /// advance the turn on its own: a numeral or wild starter leaves the
    /// current seat to act, while reverse, skip and draw two move the
    /// pointer as if the current seat had played them. With two seats a
    /// played reverse steps twice, handing the turn back to the player;
    /// a reverse starter steps once.
    pub fn resolve(
        state: &mut GameState,
        card: &Card,
        source: EffectSource,
        rng: &mut dyn RandomSource,
    ) -> PlayerId {
        let seats = state.player_count();
        let base = match source {
            EffectSource::Starter => state.current_player,
            EffectSource::Seat(seat) => seat,
        };
        let is_starter = source == EffectSource::Starter;

        match CardEffect::of(card.value) {
            CardEffect::Advance => {
                if is_starter {
                    base
                } else {
                    state.next_seat(base)
                }
            }

            CardEffect::Reverse => {
                state.direction = state.direction.reversed();
                let mut next = state.next_seat(base);
                if seats == 2 && !is_starter {
                    next = state.next_seat(next);
                }
                state.log.push(if is_starter {
                    "The starting card reversed the direction of play".to_string()
                } else {
                    "Direction reversed".to_string()
                });
                next
            }

            CardEffect::Skip => {
                let skipped = state.next_seat(base);
                let name = &state.players[skipped].name;
                let message = if is_starter {
                    format!("The starting card skips {}", name)
                } else {
                    format!("{} lost the turn", name)
                };
                state.log.push(message);
                state.next_seat(skipped)
            }

            CardEffect::ForceDraw(count) => {
                let target = state.next_seat(base);
                let dealt = zones::deal(state, target, count as usize, rng);
                if dealt < count as usize {
                    log::debug!("{} drew only {} of {} cards", target, dealt, count);
                }
                let name = &state.players[target].name;
                let message = if is_starter {
                    format!("The starting card forces {} to draw {} cards", name, count_word(count))
                } else {
                    format!("{} drew {} cards", name, count_word(count))
                };
                state.log.push(message);
                state.next_seat(target)
            }
        }
    }
}

fn count_word(count: u8) -> String {
    match count {
        2 => "two".to_string(),
        4 => "four".to_string(),
        n => n.to_string(),
    }
}
