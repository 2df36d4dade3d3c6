//! Action representation.
//!
//! The four player inputs the state machine accepts. Opponent turns are
//! compositions of these (draw, then play or pass).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{CardId, Color};

/// A complete player action.
///
/// ## Example
///
/// ```
/// use rust_uno::core::Action;
/// use rust_uno::cards::{CardId, Color};
///
/// let play = Action::play(CardId::new(5));
/// let wild = Action::play_wild(CardId::new(100), Color::Green);
/// assert_ne!(play, wild);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from the active hand. `color` binds a wild immediately.
    Play { card: CardId, color: Option<Color> },

    /// Draw the top card of the draw pile.
    Draw,

    /// End the turn after drawing.
    Pass,

    /// Bind the active color after a wild was played without one.
    SelectColor(Color),
}

impl Action {
    /// Play a card without a pre-selected color.
    #[must_use]
    pub fn play(card: CardId) -> Self {
        Action::Play { card, color: None }
    }

    /// Play a wild-family card and bind its color in the same step.
    #[must_use]
    pub fn play_wild(card: CardId, color: Color) -> Self {
        Action::Play {
            card,
            color: Some(color),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play { card, color: None } => write!(f, "play {}", card),
            Action::Play {
                card,
                color: Some(color),
            } => write!(f, "play {} as {}", card, color),
            Action::Draw => f.write_str("draw"),
            Action::Pass => f.write_str("pass"),
            Action::SelectColor(color) => write!(f, "select {}", color),
        }
    }
}
