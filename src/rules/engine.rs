//! Rules engine trait.
//!
//! `RulesEngine` is the seam between a driver (a UI loop, a simulator, a
//! benchmark) and the rules:
//! - What actions are legal
//! - How actions produce the next state
//! - When the game is over

use crate::core::{Action, ActionResult, GameConfig, GameState, InitError, PlayerId, RandomSource};

/// Result of a completed game.
///
/// Games only end by a seat emptying its hand, so there is always exactly
/// one winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if the game is over
/// - `apply_action`: Must be deterministic for a given random source
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Set up a new game from the configuration.
    fn new_game(&self, rng: &mut dyn RandomSource) -> Result<GameState, InitError>;

    /// Enumerate every action the active seat may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action, returning the next state or why it was rejected.
    fn apply_action(&self, state: &GameState, action: &Action, rng: &mut dyn RandomSource)
        -> ActionResult<GameState>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` is among the legal actions.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}
