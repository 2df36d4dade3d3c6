//! Rules scenario tests.
//!
//! Each test rigs a table with `TableSetup` and drives it through the
//! public action functions.

use rust_uno::cards::{CardColor, CardValue, Color, DECK_SIZE};
use rust_uno::core::{
    Direction, GameState, Leftovers, Phase, PlayerId, Rejection, SequenceRng, TableSetup,
};
use rust_uno::rules::{draw, initialize, is_playable, pass, play, select_color};
use rust_uno::{GameConfig, GameRng};

const RED: CardColor = CardColor::Standard(Color::Red);
const BLUE: CardColor = CardColor::Standard(Color::Blue);
const GREEN: CardColor = CardColor::Standard(Color::Green);
const YELLOW: CardColor = CardColor::Standard(Color::Yellow);
const WILD: CardColor = CardColor::Wild;

fn seat(n: u8) -> PlayerId {
    PlayerId::new(n)
}

fn nth_card(state: &GameState, seat_no: u8, idx: usize) -> rust_uno::Card {
    state.players[seat(seat_no)].hand[idx]
}

// =============================================================================
// Legality
// =============================================================================

/// Move the first card matching `color` and `value` out of wherever it is.
fn extract(state: &mut GameState, color: CardColor, value: CardValue) -> rust_uno::Card {
    let wanted = |c: &rust_uno::Card| c.color == color && c.value == value;
    if let Some(pos) = state.draw_pile.iter().position(wanted) {
        return state.draw_pile.remove(pos);
    }
    if let Some(pos) = state.discard_pile.iter().position(wanted) {
        return state.discard_pile.remove(pos);
    }
    for id in PlayerId::all(state.player_count()) {
        if let Some(pos) = state.players[id].hand.iter().position(wanted) {
            return state.players[id].hand.remove(pos);
        }
    }
    panic!("card not found");
}

/// A blue 5 matches a red 5 by value and rebinds the color to blue.
#[test]
fn test_value_match_on_dealt_game() {
    let mut state = initialize(&GameConfig::default(), &mut GameRng::new(11)).unwrap();

    let red_five = extract(&mut state, RED, CardValue::Number(5));
    let blue_five = extract(&mut state, BLUE, CardValue::Number(5));
    state.discard_pile.push_back(red_five);
    state.current_color = Color::Red;
    state.current_player = seat(0);
    state.players[seat(0)].hand.push_back(blue_five);
    assert!(state.check_invariants().is_ok());

    assert!(is_playable(&state, &blue_five));
    let next = play(&state, blue_five.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.current_color, Color::Blue);
    assert_eq!(next.top_discard(), Some(&blue_five));
    assert_eq!(next.total_cards(), DECK_SIZE);
}

/// Same scenario on a conserving rigged table.
#[test]
fn test_value_match_scenario() {
    let state = TableSetup::new(4)
        .hand(0, &[(BLUE, CardValue::Number(5)), (GREEN, CardValue::Skip)])
        .discard_top(RED, CardValue::Number(5))
        .build();
    let blue_five = nth_card(&state, 0, 0);

    let next = play(&state, blue_five.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.current_color, Color::Blue);
    assert_eq!(next.current_player, seat(1));
    assert_eq!(next.total_cards(), DECK_SIZE);
}

/// Rejected plays leave the caller's snapshot deep-equal.
#[test]
fn test_illegal_plays_are_rejected() {
    let state = TableSetup::new(3)
        .hand(0, &[(GREEN, CardValue::Number(7)), (RED, CardValue::Number(1))])
        .hand(1, &[(RED, CardValue::Number(2))])
        .discard_top(RED, CardValue::Number(5))
        .build();
    let before = state.clone();
    let green = nth_card(&state, 0, 0);
    let not_mine = nth_card(&state, 1, 0);

    assert_eq!(
        play(&state, green.id, None, &mut SequenceRng::zeros()),
        Err(Rejection::NoMatch(green.id))
    );
    assert_eq!(
        play(&state, not_mine.id, None, &mut SequenceRng::zeros()),
        Err(Rejection::CardNotInHand(not_mine.id))
    );
    assert_eq!(state, before);
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_last_card_wins() {
    let state = TableSetup::new(4)
        .hand(2, &[(YELLOW, CardValue::Skip)])
        .discard_top(YELLOW, CardValue::Number(1))
        .current_player(2)
        .build();
    let card = nth_card(&state, 2, 0);

    let done = play(&state, card.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(done.phase, Phase::Finished);
    assert_eq!(done.winner_id, Some(seat(2)));
    assert_eq!(done.current_player, seat(2));
    assert!(!done.log.iter().any(|e| e.contains("lost the turn")));
    assert!(done.check_invariants().is_ok());
}

// =============================================================================
// Turn Order Effects
// =============================================================================

/// With two seats a reverse hands the turn straight back to its player.
#[test]
fn test_reverse_two_players() {
    let state = TableSetup::new(2)
        .hand(1, &[(RED, CardValue::Reverse), (RED, CardValue::Number(1))])
        .discard_top(RED, CardValue::Number(5))
        .current_player(1)
        .build();
    let card = nth_card(&state, 1, 0);

    let next = play(&state, card.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.direction, Direction::Backward);
    assert_eq!(next.current_player, seat(1));

    // A second reverse flips direction back
    let again = TableSetup::new(2)
        .hand(1, &[(RED, CardValue::Reverse), (RED, CardValue::Number(1))])
        .discard_top(RED, CardValue::Number(5))
        .current_player(1)
        .direction(Direction::Backward)
        .build();
    let card = nth_card(&again, 1, 0);
    let next = play(&again, card.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.direction, Direction::Forward);
    assert_eq!(next.current_player, seat(1));
}

#[test]
fn test_reverse_four_players() {
    let state = TableSetup::new(4)
        .hand(0, &[(RED, CardValue::Reverse), (RED, CardValue::Number(1))])
        .discard_top(RED, CardValue::Number(5))
        .build();
    let card = nth_card(&state, 0, 0);

    let next = play(&state, card.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.direction, Direction::Backward);
    assert_eq!(next.current_player, seat(3));
}

#[test]
fn test_skip_passes_over_one_seat() {
    for (player, expected) in [(0, 2), (1, 3), (2, 0), (3, 1)] {
        let state = TableSetup::new(4)
            .hand(player, &[(GREEN, CardValue::Skip), (GREEN, CardValue::Number(1))])
            .discard_top(GREEN, CardValue::Number(5))
            .current_player(player)
            .build();
        let card = nth_card(&state, player, 0);

        let next = play(&state, card.id, None, &mut SequenceRng::zeros()).unwrap();
        assert_eq!(next.current_player, seat(expected), "skip from seat {}", player);
    }
}

#[test]
fn test_draw_two_grows_target_hand() {
    let state = TableSetup::new(3)
        .hand(0, &[(BLUE, CardValue::DrawTwo), (BLUE, CardValue::Number(1))])
        .hand(2, &[(RED, CardValue::Number(3))])
        .discard_top(BLUE, CardValue::Number(5))
        .direction(Direction::Backward)
        .build();
    let card = nth_card(&state, 0, 0);

    let next = play(&state, card.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.players[seat(2)].hand.len(), 3);
    assert_eq!(next.current_player, seat(1));
    assert_eq!(next.total_cards(), DECK_SIZE);
}

#[test]
fn test_wild_draw_four_grows_target_hand() {
    let state = TableSetup::new(4)
        .hand(3, &[(WILD, CardValue::WildDrawFour), (BLUE, CardValue::Number(1))])
        .discard_top(BLUE, CardValue::Number(5))
        .current_player(3)
        .build();
    let card = nth_card(&state, 3, 0);

    let next = play(&state, card.id, Some(Color::Red), &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.players[seat(0)].hand.len(), 4);
    assert_eq!(next.current_player, seat(1));
    assert_eq!(next.current_color, Color::Red);
}

// =============================================================================
// Wild Color Binding
// =============================================================================

#[test]
fn test_wild_color_binding_round_trip() {
    let state = TableSetup::new(3)
        .hand(1, &[(WILD, CardValue::Wild), (YELLOW, CardValue::Number(2))])
        .discard_top(BLUE, CardValue::Number(5))
        .current_player(1)
        .build();
    let card = nth_card(&state, 1, 0);

    let pending = play(&state, card.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(pending.phase, Phase::ChooseColor);
    let resume = pending.pending_color.unwrap();
    assert_eq!(resume.player_id, seat(1));
    assert_eq!(resume.next_player, seat(2));
    assert_eq!(pending.current_color, Color::Blue);

    assert_eq!(pass(&pending), Err(Rejection::WrongPhase(Phase::ChooseColor)));

    let resumed = select_color(&pending, Color::Yellow).unwrap();
    assert_eq!(resumed.phase, Phase::Playing);
    assert_eq!(resumed.current_player, seat(2));
    assert_eq!(resumed.current_color, Color::Yellow);

    // Yellow now matches, blue no longer does
    let yellow_table = TableSetup::new(3).hand(0, &[(YELLOW, CardValue::Number(8))]).build();
    let yellow = yellow_table.players[seat(0)].hand[0];
    assert!(is_playable(&resumed, &yellow));
}

// =============================================================================
// Recycling
// =============================================================================

#[test]
fn test_draw_recycles_discards() {
    let state = TableSetup::new(2)
        .hand(0, &[(GREEN, CardValue::Number(1))])
        .discard_top(RED, CardValue::Number(5))
        .leftovers(Leftovers::UnderDiscard)
        .build();
    let top = *state.top_discard().unwrap();
    assert!(state.draw_pile.is_empty());

    let next = draw(&state, &mut GameRng::new(5)).unwrap();
    assert_eq!(next.discard_pile.len(), 1);
    assert_eq!(next.top_discard(), Some(&top));
    assert!(!next.draw_pile.is_empty());
    assert_eq!(next.draw_pile.len(), DECK_SIZE - 3);
    assert_eq!(next.total_cards(), DECK_SIZE);
}

#[test]
fn test_draw_with_nothing_to_recycle() {
    let state = TableSetup::new(2).leftovers(Leftovers::Hand(1)).build();
    let before = state.clone();

    assert_eq!(draw(&state, &mut SequenceRng::zeros()), Err(Rejection::PilesExhausted));
    assert_eq!(state, before);
}

// =============================================================================
// Drawn Card Constraint
// =============================================================================

#[test]
fn test_draw_then_pass_scenario() {
    let state = TableSetup::new(4)
        .hand(0, &[(GREEN, CardValue::Number(1)), (YELLOW, CardValue::Skip)])
        .draw_pile_top(&[(BLUE, CardValue::Number(9)), (RED, CardValue::Number(2))])
        .discard_top(RED, CardValue::Number(5))
        .build();
    assert!(state.active_player().hand.iter().all(|c| !is_playable(&state, c)));
    assert_eq!(pass(&state), Err(Rejection::MustDrawFirst));

    let drawn = draw(&state, &mut SequenceRng::zeros()).unwrap();
    let blue_nine = *drawn.drawn_card().unwrap();
    assert_eq!(drawn.players[seat(0)].hand.len(), 3);
    assert!(!is_playable(&drawn, &blue_nine));

    let green = nth_card(&drawn, 0, 0);
    assert_eq!(
        play(&drawn, green.id, None, &mut SequenceRng::zeros()),
        Err(Rejection::MustPlayDrawnCard(blue_nine.id))
    );

    let passed = pass(&drawn).unwrap();
    assert_eq!(passed.current_player, seat(1));
    assert!(passed.drawn_card_id.is_none());
}

#[test]
fn test_drawn_card_can_be_played() {
    let state = TableSetup::new(2)
        .hand(0, &[(GREEN, CardValue::Number(1)), (RED, CardValue::Number(3))])
        .draw_pile_top(&[(RED, CardValue::Number(9))])
        .discard_top(RED, CardValue::Number(5))
        .build();

    let drawn = draw(&state, &mut SequenceRng::zeros()).unwrap();
    let red_nine = *drawn.drawn_card().unwrap();
    let red_three = nth_card(&drawn, 0, 1);

    // The red 3 matched before drawing but is locked out now
    assert!(!is_playable(&drawn, &red_three));
    let next = play(&drawn, red_nine.id, None, &mut SequenceRng::zeros()).unwrap();
    assert_eq!(next.current_player, seat(1));
    assert!(next.drawn_card_id.is_none());
}
