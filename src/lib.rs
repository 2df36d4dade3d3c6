//! # rust-uno
//!
//! A turn-based rules engine for the UNO-style shedding card game, for two
//! to four seats with one or more scripted opponents.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: Every action takes a `GameState` by
//!    reference and returns a new one. Cloning is cheap because piles and
//!    hands are `im` persistent vectors, so callers can keep any snapshot
//!    for undo or replay.
//!
//! 2. **Explicit rejections**: An illegal action returns `Err(Rejection)`
//!    and leaves the caller's snapshot as it was.
//!
//! 3. **Injected randomness**: Shuffles, recycles and random color picks
//!    draw from a `RandomSource` passed in by the caller. Seed a `GameRng`
//!    for reproducible games or script a `SequenceRng` in tests.
//!
//! ## Example
//!
//! ```
//! use rust_uno::{initialize_default, take_opponent_turn, GameRng, Phase};
//!
//! let mut rng = GameRng::new(42);
//! let mut state = initialize_default(&mut rng).unwrap();
//!
//! // Let the scripted seats play until the human is up
//! while state.phase == Phase::Playing && !state.active_player().is_human {
//!     match take_opponent_turn(&state, &mut rng) {
//!         Ok(next) => state = next,
//!         Err(_) => break,
//!     }
//! }
//! assert_eq!(state.total_cards(), 108);
//! ```
//!
//! ## Modules
//!
//! - `core`: Seats, state, actions, RNG, configuration, errors
//! - `cards`: Cards and the 108-card deck
//! - `zones`: Draw pile recycling and dealing
//! - `effects`: Turn-order effects of action cards
//! - `rules`: The state machine and the `RulesEngine` trait
//! - `policy`: Scripted opponents

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player, Direction,
    GameRng, GameRngState, RandomSource, SequenceRng,
    GameConfig, SeatConfig,
    Action, EventLog,
    GameState, PendingColor, Phase,
    ActionResult, InitError, Rejection, InvariantViolation, SnapshotError,
    TableSetup, Leftovers,
};

pub use crate::cards::{Card, CardColor, CardId, CardValue, Color, DECK_SIZE};

pub use crate::effects::{CardEffect, EffectResolver, EffectSource};

pub use crate::rules::{
    RulesEngine, GameResult, UnoRules,
    initialize, initialize_default, play, draw, pass, select_color, apply,
    is_playable, playability, playable_cards,
};

pub use crate::policy::{
    OpponentPolicy, GreedyOpponent, UniformOpponent,
    take_opponent_turn, take_turn, play_out,
};
