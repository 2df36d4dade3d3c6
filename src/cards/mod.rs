//! Card system: card values and the deck.
//!
//! ## Key Types
//!
//! - `CardId`: Unique identifier of a physical card in the deck
//! - `Color`: One of the four standard colors
//! - `CardColor`: Printed color (`Standard` or `Wild`)
//! - `CardValue`: Numerals and action values
//! - `Card`: Immutable card value
//!
//! The deck module builds the canonical 108-card deck and shuffles it.

pub mod card;
pub mod deck;

pub use card::{Card, CardColor, CardId, CardValue, Color};
pub use deck::{build_deck, shuffle_cards, DECK_SIZE};
