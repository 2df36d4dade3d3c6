//! Scripted opponents.
//!
//! - `OpponentPolicy`: card and color decisions for a non-human seat
//! - `GreedyOpponent`: the standard priority-driven opponent
//! - `UniformOpponent`: a random baseline for simulations
//! - `take_opponent_turn` / `take_turn`: one full scripted turn
//! - `play_out`: run scripted seats until a human is up or the game ends

mod opponent;

pub use opponent::{
    play_out, take_opponent_turn, take_turn, GreedyOpponent, OpponentPolicy, UniformOpponent,
};
