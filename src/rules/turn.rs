//! The state machine: setup and the four player actions.
//!
//! ```text
//! playing ──play wild, no color──▶ choose-color ──select_color──▶ playing
//!    │
//!    └──play last card──▶ finished (terminal)
//! ```
//!
//! Every action takes the current snapshot by reference and returns a new
//! one. A rejected action returns `Err` and the caller keeps its snapshot,
//! so a rejection is always a no-op.

use im::Vector;

use crate::cards::{build_deck, shuffle_cards, Card, CardId, CardValue, Color, DECK_SIZE};
use crate::core::config::{MAX_SEATS, MIN_SEATS};
use crate::core::rng;
use crate::core::{
    Action, ActionResult, Direction, EventLog, GameConfig, GameState, InitError, PendingColor,
    Phase, Player, PlayerId, PlayerMap, RandomSource, Rejection,
};
use crate::effects::{EffectResolver, EffectSource};
use crate::zones;

/// Set up a new game: shuffle, deal, reveal the starter and apply its effect.
///
/// A `wild draw four` may not start the game; each one revealed goes to
/// the bottom of the draw pile and the next card is tried. A wild starter
/// gets a uniformly random color.
pub fn initialize(config: &GameConfig, rng: &mut dyn RandomSource) -> Result<GameState, InitError> {
    let seats = config.player_count();
    if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
        return Err(InitError::InvalidSeatCount { seats });
    }
    let needed = seats * config.hand_size;
    if needed > DECK_SIZE {
        return Err(InitError::DeckTooSmall {
            needed,
            available: DECK_SIZE,
        });
    }

    let players = PlayerMap::new(seats, |id| {
        let seat = &config.seats[id.index()];
        Player::new(id, seat.name.clone(), seat.is_human)
    });

    let mut state = GameState {
        players,
        current_player: PlayerId::new(0),
        direction: Direction::Forward,
        draw_pile: shuffle_cards(&build_deck(), rng),
        discard_pile: Vector::new(),
        current_color: Color::Red,
        pending_color: None,
        phase: Phase::Playing,
        winner_id: None,
        log: EventLog::new(config.log_limit),
        drawn_card_id: None,
        last_played_card: None,
        turn_count: 0,
    };

    for seat in PlayerId::all(seats) {
        zones::deal(&mut state, seat, config.hand_size, rng);
    }

    let starter = reveal_starter(&mut state)?;
    state.discard_pile.push_back(starter);
    state.current_color = match starter.color.standard() {
        Some(color) => color,
        None => random_color(rng),
    };
    state.log.push(format!("The starting card is {}", starter));

    state.current_player =
        EffectResolver::resolve(&mut state, &starter, EffectSource::Starter, rng);

    log::debug!(
        "new game: {} seats, starter {}, {} to act",
        seats,
        starter,
        state.current_player
    );
    Ok(state)
}

/// Set up a game at the default four-seat table.
pub fn initialize_default(rng: &mut dyn RandomSource) -> Result<GameState, InitError> {
    initialize(&GameConfig::default(), rng)
}

fn reveal_starter(state: &mut GameState) -> Result<Card, InitError> {
    for _ in 0..state.draw_pile.len() {
        let Some(candidate) = state.draw_pile.pop_front() else {
            break;
        };
        if candidate.value == CardValue::WildDrawFour {
            state.draw_pile.push_back(candidate);
            continue;
        }
        return Ok(candidate);
    }
    Err(InitError::NoStarterCard {
        remaining: state.draw_pile.len(),
    })
}

/// Why `card` cannot be played right now, if it cannot.
///
/// Only the `playing` phase allows plays. After drawing, only the drawn
/// card may be played. Wilds always match; other cards match the active
/// color or the top card's value. An empty discard pile matches anything.
pub fn playability(state: &GameState, card: &Card) -> ActionResult<()> {
    match state.phase {
        Phase::Playing => {}
        Phase::Finished => return Err(Rejection::GameFinished),
        phase => return Err(Rejection::WrongPhase(phase)),
    }

    if let Some(drawn) = state.drawn_card_id {
        if drawn != card.id {
            return Err(Rejection::MustPlayDrawnCard(drawn));
        }
    }

    if card.is_wild() {
        return Ok(());
    }

    let Some(top) = state.top_discard() else {
        return Ok(());
    };

    if card.color.standard() == Some(state.current_color) || card.value == top.value {
        Ok(())
    } else {
        Err(Rejection::NoMatch(card.id))
    }
}

/// Can `card` legally be played right now?
#[must_use]
pub fn is_playable(state: &GameState, card: &Card) -> bool {
    playability(state, card).is_ok()
}

/// Cards in the active hand that may be played now, in hand order.
#[must_use]
pub fn playable_cards(state: &GameState) -> Vec<Card> {
    state
        .active_player()
        .hand
        .iter()
        .filter(|card| is_playable(state, card))
        .copied()
        .collect()
}

/// Play `card_id` from the active hand.
///
/// `chosen_color` binds a wild immediately; without it a wild opens the
/// choose-color phase and the turn waits on `select_color`. It is ignored
/// for colored cards. Emptying the hand finishes the game on the spot:
/// no effect resolves and the turn counter does not advance.
pub fn play(
    state: &GameState,
    card_id: CardId,
    chosen_color: Option<Color>,
    rng: &mut dyn RandomSource,
) -> ActionResult<GameState> {
    if state.is_finished() {
        return Err(Rejection::GameFinished);
    }

    let acting = state.current_player;
    let card = *state
        .active_player()
        .card(card_id)
        .ok_or(Rejection::CardNotInHand(card_id))?;
    playability(state, &card)?;

    let mut next = state.clone();
    next.players[acting].take(card_id);
    next.discard_pile.push_back(card);
    next.drawn_card_id = None;
    next.last_played_card = Some(card);

    let name = next.players[acting].name.clone();
    next.log.push(format!("{} played {}", name, card));

    if let Some(color) = card.color.standard().or(chosen_color) {
        next.current_color = color;
    }

    if next.players[acting].hand.is_empty() {
        next.phase = Phase::Finished;
        next.winner_id = Some(acting);
        next.log.push(format!("{} wins!", name));
        return Ok(next);
    }

    let following = EffectResolver::resolve(&mut next, &card, EffectSource::Seat(acting), rng);

    match (card.is_wild(), chosen_color) {
        (true, None) => {
            next.phase = Phase::ChooseColor;
            next.pending_color = Some(PendingColor {
                player_id: acting,
                card_id,
                next_player: following,
                value: card.value,
            });
            next.log.push(format!("Choose a color for the {}", card.value));
        }
        (true, Some(color)) => {
            next.log.push(format!("Color chosen: {}", color));
            next.current_player = following;
        }
        (false, _) => next.current_player = following,
    }

    next.turn_count += 1;
    Ok(next)
}

/// Bind the active color after a wild and hand the turn on.
pub fn select_color(state: &GameState, color: Color) -> ActionResult<GameState> {
    match state.phase {
        Phase::ChooseColor => {}
        Phase::Finished => return Err(Rejection::GameFinished),
        phase => return Err(Rejection::WrongPhase(phase)),
    }
    let pending = state.pending_color.ok_or(Rejection::WrongPhase(state.phase))?;

    let mut next = state.clone();
    next.current_color = color;
    next.phase = Phase::Playing;
    next.pending_color = None;
    next.current_player = pending.next_player;
    next.log.push(format!("Color set to {}", color));
    Ok(next)
}

/// Draw one card for the active seat.
///
/// Recycles the discard pile if the draw pile is empty. The drawn card
/// becomes the only card the seat may play this turn; otherwise it must
/// pass.
pub fn draw(state: &GameState, rng: &mut dyn RandomSource) -> ActionResult<GameState> {
    match state.phase {
        Phase::Playing => {}
        Phase::Finished => return Err(Rejection::GameFinished),
        phase => return Err(Rejection::WrongPhase(phase)),
    }

    let mut next = state.clone();
    let card = zones::draw_top(&mut next, rng).ok_or(Rejection::PilesExhausted)?;
    let seat = next.current_player;
    next.players[seat].receive(card);
    next.drawn_card_id = Some(card.id);

    let message = format!("{} drew a card", next.players[seat].name);
    next.log.push(message);
    Ok(next)
}

/// End the turn after drawing.
pub fn pass(state: &GameState) -> ActionResult<GameState> {
    match state.phase {
        Phase::Playing => {}
        Phase::Finished => return Err(Rejection::GameFinished),
        phase => return Err(Rejection::WrongPhase(phase)),
    }
    if state.drawn_card_id.is_none() {
        return Err(Rejection::MustDrawFirst);
    }

    let mut next = state.clone();
    next.current_player = state.next_seat(state.current_player);
    next.drawn_card_id = None;
    next.log.push(format!("{} passed", state.active_player().name));
    Ok(next)
}

/// Apply any `Action`.
pub fn apply(
    state: &GameState,
    action: &Action,
    rng: &mut dyn RandomSource,
) -> ActionResult<GameState> {
    let result = match *action {
        Action::Play { card, color } => play(state, card, color, rng),
        Action::Draw => draw(state, rng),
        Action::Pass => pass(state),
        Action::SelectColor(color) => select_color(state, color),
    };
    if let Err(reason) = &result {
        log::trace!("{} rejected {}: {}", state.current_player, action, reason);
    }
    result
}

/// Pick a uniformly random standard color.
pub(crate) fn random_color(rng: &mut dyn RandomSource) -> Color {
    rng::choose(rng, &Color::ALL).copied().unwrap_or(Color::Red)
}
