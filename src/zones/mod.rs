//! Pile management for the shared draw and discard piles.
//!
//! The draw pile is refilled lazily: only when a draw finds it empty is
//! the discard pile (minus its top card) shuffled back in.

mod piles;

pub use piles::{deal, draw_top, ensure_draw_pile};
