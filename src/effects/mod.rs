//! Effect system for special cards.
//!
//! - `CardEffect`: the turn-order effect a card value carries
//! - `EffectResolver`: applies it to a working state and picks the next seat
//!
//! Reverse flips direction, skip passes over one seat, draw two and wild
//! draw four make the next seat draw and forfeit its turn.

mod effect;
mod resolver;

pub use effect::CardEffect;
pub use resolver::{EffectResolver, EffectSource};
