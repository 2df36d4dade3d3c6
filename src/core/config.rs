//! Table configuration.
//!
//! Callers configure a game at startup by providing:
//! - `SeatConfig`: name and controller (human or scripted) of each seat
//! - `GameConfig`: seats plus starting hand size and event log capacity
//!
//! The default table seats four players with seat 0 human.

use serde::{Deserialize, Serialize};

/// Smallest supported table.
pub const MIN_SEATS: usize = 2;
/// Largest supported table.
pub const MAX_SEATS: usize = 4;
/// Cards dealt to each seat.
pub const STARTING_HAND_SIZE: usize = 7;
/// Event log entries kept before the oldest is dropped.
pub const LOG_LIMIT: usize = 60;

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    pub name: String,

    /// Human seats are driven by the caller; others by an opponent policy.
    pub is_human: bool,
}

impl SeatConfig {
    /// A seat driven by the caller.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: true,
        }
    }

    /// A seat driven by an opponent policy.
    pub fn scripted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: false,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,

    /// Cards dealt to each seat at setup.
    pub hand_size: usize,

    /// Maximum event log length.
    pub log_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                SeatConfig::human("You"),
                SeatConfig::scripted("Layla"),
                SeatConfig::scripted("Salem"),
                SeatConfig::scripted("Adam"),
            ],
            hand_size: STARTING_HAND_SIZE,
            log_limit: LOG_LIMIT,
        }
    }
}

impl GameConfig {
    /// The default four-seat table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A heads-up table: one human against one scripted opponent.
    #[must_use]
    pub fn two_player() -> Self {
        Self::default().with_seats(vec![SeatConfig::human("You"), SeatConfig::scripted("Layla")])
    }

    /// Replace the seats.
    ///
    /// Panics unless 2-4 seats are given.
    #[must_use]
    pub fn with_seats(mut self, seats: Vec<SeatConfig>) -> Self {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&seats.len()),
            "Seat count must be {}-{}",
            MIN_SEATS,
            MAX_SEATS
        );
        self.seats = seats;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be positive");
        self.hand_size = size;
        self
    }

    /// Set the event log capacity.
    #[must_use]
    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }
}
