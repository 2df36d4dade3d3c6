//! Game state: the single aggregate every action replaces.
//!
//! ## GameState
//!
//! - Seats and their hands, turn pointer and direction
//! - Draw pile (top = front) and discard pile (top = back)
//! - Active color and any pending wild color selection
//! - Phase, winner, drawn-card constraint, event log
//!
//! Piles and hands use `im` persistent vectors, so cloning a snapshot is
//! O(1) and every transition can return a fresh value cheaply.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{InvariantViolation, SnapshotError};
use super::event_log::EventLog;
use super::player::{Direction, Player, PlayerId, PlayerMap};
use crate::cards::{Card, CardId, CardValue, Color, DECK_SIZE};

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    /// A wild was played without a color; only color selection is legal.
    ChooseColor,
    /// Terminal. Only a fresh game changes anything.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Playing => "playing",
            Phase::ChooseColor => "choose-color",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Suspended wild play awaiting a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingColor {
    /// Seat that played the wild.
    pub player_id: PlayerId,
    /// The wild card played.
    pub card_id: CardId,
    /// Seat that acts once the color is bound.
    pub next_player: PlayerId,
    /// `Wild` or `WildDrawFour`.
    pub value: CardValue,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    /// Seat to act.
    pub current_player: PlayerId,

    pub direction: Direction,

    /// Face-down pile; cards are drawn from the front.
    pub draw_pile: Vector<Card>,

    /// Face-up pile; the top card is the last element.
    pub discard_pile: Vector<Card>,

    /// Color a non-wild play must match when not matching by value.
    pub current_color: Color,

    /// Set exactly when `phase == ChooseColor`.
    pub pending_color: Option<PendingColor>,

    pub phase: Phase,

    /// Set only when `phase == Finished`.
    pub winner_id: Option<PlayerId>,

    pub log: EventLog,

    /// Card drawn by the active seat this turn; only it may be played.
    pub drawn_card_id: Option<CardId>,

    pub last_played_card: Option<Card>,

    /// Completed non-winning plays.
    pub turn_count: u32,
}

impl GameState {
    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The seat to act.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Look up a seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.back()
    }

    /// The seat after `from` in the current direction.
    #[must_use]
    pub fn next_seat(&self, from: PlayerId) -> PlayerId {
        from.step(self.direction, self.player_count())
    }

    /// The card the active seat drew this turn, if any.
    #[must_use]
    pub fn drawn_card(&self) -> Option<&Card> {
        self.drawn_card_id
            .and_then(|id| self.active_player().card(id))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Cards across both piles and every hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
    }

    /// Check the structural invariants: the full deck is present exactly
    /// once, the turn pointer is a real seat, and pending/winner agree
    /// with the phase.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(InvariantViolation::CardCount { found: total });
        }

        let mut seen = FxHashSet::default();
        let all_cards = self
            .draw_pile
            .iter()
            .chain(self.discard_pile.iter())
            .chain(self.players.values().flat_map(|p| p.hand.iter()));
        for card in all_cards {
            if !seen.insert(card.id) {
                return Err(InvariantViolation::DuplicateCard(card.id));
            }
        }

        if self.current_player.index() >= self.player_count() {
            return Err(InvariantViolation::InvalidSeat(self.current_player));
        }
        if self.pending_color.is_some() != (self.phase == Phase::ChooseColor) {
            return Err(InvariantViolation::PendingMismatch(self.phase));
        }
        if self.winner_id.is_some() != (self.phase == Phase::Finished) {
            return Err(InvariantViolation::WinnerMismatch(self.phase));
        }
        Ok(())
    }

    /// Encode the state as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
