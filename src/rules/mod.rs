//! Game rules.
//!
//! - `turn`: the state machine (setup, play, draw, pass, color selection)
//! - `engine`: the `RulesEngine` trait drivers program against
//! - `uno`: `UnoRules`, the standard rules behind that trait

pub mod engine;
pub mod turn;
mod uno;

pub use engine::{GameResult, RulesEngine};
pub use turn::{
    apply, draw, initialize, initialize_default, is_playable, pass, play, playability,
    playable_cards, select_color,
};
pub use uno::UnoRules;
