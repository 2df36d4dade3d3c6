//! Card values: identity, color and face value.
//!
//! A `Card` is an immutable value. Identity is by `CardId`; two cards may
//! share color and value. Wild-family cards always carry `CardColor::Wild`;
//! the color they stand for once played lives in the game state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a card within one deck.
///
/// Displayed as `card-N`. Ordering is by the numeric index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// One of the four standard colors. The active color is always one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// All standard colors in canonical order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// Canonical position in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Blue => 3,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Color printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Standard(Color),
    Wild,
}

impl CardColor {
    /// The standard color, or `None` for wild cards.
    #[must_use]
    pub const fn standard(self) -> Option<Color> {
        match self {
            CardColor::Standard(color) => Some(color),
            CardColor::Wild => None,
        }
    }

    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

impl From<Color> for CardColor {
    fn from(color: Color) -> Self {
        CardColor::Standard(color)
    }
}

/// Face value of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    /// Numeral 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardValue {
    /// Colored action values, two of each per color.
    pub const ACTIONS: [CardValue; 3] = [CardValue::Skip, CardValue::Reverse, CardValue::DrawTwo];

    /// Is this `wild` or `wild-draw-four`?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardValue::Wild | CardValue::WildDrawFour)
    }

    /// Greedy opponent preference: higher plays first.
    #[must_use]
    pub const fn opponent_priority(self) -> u8 {
        match self {
            CardValue::WildDrawFour => 5,
            CardValue::Wild => 4,
            CardValue::DrawTwo => 3,
            CardValue::Skip => 2,
            CardValue::Reverse => 1,
            CardValue::Number(_) => 0,
        }
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(n) => write!(f, "{}", n),
            CardValue::Skip => f.write_str("skip"),
            CardValue::Reverse => f.write_str("reverse"),
            CardValue::DrawTwo => f.write_str("draw two"),
            CardValue::Wild => f.write_str("wild"),
            CardValue::WildDrawFour => f.write_str("wild draw four"),
        }
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: CardColor,
    pub value: CardValue,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if the color does not agree with the value: wild values need
    /// `CardColor::Wild`, everything else a standard color.
    #[must_use]
    pub fn new(id: CardId, color: CardColor, value: CardValue) -> Self {
        assert_eq!(
            color.is_wild(),
            value.is_wild(),
            "{} cannot carry color {:?}",
            value,
            color
        );
        if let CardValue::Number(n) = value {
            assert!(n <= 9, "Numeral out of range: {}", n);
        }
        Self { id, color, value }
    }

    /// Create a colored card.
    #[must_use]
    pub fn colored(id: CardId, color: Color, value: CardValue) -> Self {
        Self::new(id, CardColor::Standard(color), value)
    }

    /// Create a wild-family card.
    #[must_use]
    pub fn wild(id: CardId, value: CardValue) -> Self {
        Self::new(id, CardColor::Wild, value)
    }

    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.color.is_wild()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            CardColor::Standard(color) => write!(f, "{} {}", color, self.value),
            CardColor::Wild => write!(f, "{}", self.value),
        }
    }
}
