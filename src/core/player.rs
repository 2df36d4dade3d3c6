//! Seats, turn direction and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seat order is turn order before any reverse.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, CardId};

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The neighbouring seat in `direction`, wrapping around the table.
    ///
    /// ```
    /// use rust_uno::core::{Direction, PlayerId};
    ///
    /// assert_eq!(PlayerId::new(3).step(Direction::Forward, 4), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(0).step(Direction::Backward, 4), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, seat_count: usize) -> Self {
        let next = match direction {
            Direction::Forward => (self.index() + 1) % seat_count,
            Direction::Backward => (self.index() + seat_count - 1) % seat_count,
        };
        Self(next as u8)
    }

    /// Iterate over all seats for a table of `seat_count`.
    pub fn all(seat_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..seat_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Turn direction: `Forward` steps seat indices by +1, `Backward` by -1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A seated participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Ordered hand; new cards are appended.
    pub hand: Vector<Card>,
    pub is_human: bool,
    /// True iff the hand held exactly one card after its last change.
    /// Display-only; never enforced.
    pub said_uno: bool,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vector::new(),
            is_human,
            said_uno: false,
        }
    }

    /// Add a card to the end of the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push_back(card);
        self.said_uno = self.hand.len() == 1;
    }

    /// Remove a card by id, returning it if held.
    pub fn take(&mut self, card_id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card_id)?;
        let card = self.hand.remove(pos);
        self.said_uno = self.hand.len() == 1;
        Some(card)
    }

    /// Find a held card by id.
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card_id)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_uno::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::new(4, |_| 0);
/// scores[PlayerId::new(1)] = 15;
/// assert_eq!(scores[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 player");
        assert!(seat_count <= 255, "At most 255 players supported");

        let data = (0..seat_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
