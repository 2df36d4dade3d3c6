//! Effect definitions.
//!
//! Every card value maps to one turn-order effect. Color binding for the
//! wild family is not an effect here; the rules handle it when the card
//! is played.

use serde::{Deserialize, Serialize};

use crate::cards::CardValue;

/// Turn-order effect of a played or starter card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// Normal advance (numerals and `wild`).
    Advance,
    /// Flip direction.
    Reverse,
    /// The next seat loses its turn.
    Skip,
    /// The next seat draws this many cards and loses its turn.
    ForceDraw(u8),
}

impl CardEffect {
    /// The effect a card value carries.
    #[must_use]
    pub const fn of(value: CardValue) -> Self {
        match value {
            CardValue::Number(_) | CardValue::Wild => CardEffect::Advance,
            CardValue::Reverse => CardEffect::Reverse,
            CardValue::Skip => CardEffect::Skip,
            CardValue::DrawTwo => CardEffect::ForceDraw(2),
            CardValue::WildDrawFour => CardEffect::ForceDraw(4),
        }
    }
}
