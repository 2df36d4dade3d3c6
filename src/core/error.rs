//! Error types for game setup, actions and snapshots.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Phase;
use crate::cards::CardId;

/// Fatal setup failure. No playable state exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("no valid starter card among {remaining} undealt cards")]
    NoStarterCard { remaining: usize },

    #[error("a table seats 2 to 4 players, got {seats}")]
    InvalidSeatCount { seats: usize },
    #[error("not enough cards to deal {needed}, only {available} in the deck")]
    DeckTooSmall { needed: usize, available: usize },
}

/// Why an action was not applied. The input state is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("the game is finished")]
    GameFinished,

    #[error("action not allowed during the {0} phase")]
    WrongPhase(Phase),

    #[error("{0} is not in the active player's hand")]
    CardNotInHand(CardId),

    #[error("only the drawn card {0} may be played this turn")]
    MustPlayDrawnCard(CardId),

    #[error("{0} matches neither the active color nor the top card")]
    NoMatch(CardId),

    #[error("draw and discard piles are exhausted")]
    PilesExhausted,

    #[error("cannot pass without drawing first")]
    MustDrawFirst,

    #[error("the active seat is controlled by a human")]
    HumanSeat,
}

/// A structural invariant of `GameState` does not hold.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("expected 108 cards in play, found {found}")]
    CardCount { found: usize },

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("turn pointer {0} is not a seat")]
    InvalidSeat(PlayerId),

    #[error("pending color does not match the {0} phase")]
    PendingMismatch(Phase),

    #[error("winner does not match the {0} phase")]
    WinnerMismatch(Phase),
}

/// Snapshot encode or decode failure.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

pub type ActionResult<T> = std::result::Result<T, Rejection>;
