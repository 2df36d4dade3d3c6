//! Core engine types: seats, state, actions, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module works with.
//! Rules live in `rules`; this module only describes and stores.

pub mod action;
pub mod config;
pub mod error;
pub mod event_log;
pub mod player;
pub mod rng;
pub mod setup;
pub mod state;

pub use action::Action;
pub use config::{GameConfig, SeatConfig};
pub use error::{ActionResult, InitError, InvariantViolation, Rejection, SnapshotError};
pub use event_log::EventLog;
pub use player::{Direction, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceRng};
pub use setup::{Leftovers, TableSetup};
pub use state::{GameState, PendingColor, Phase};
