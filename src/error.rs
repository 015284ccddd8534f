//! Error types for game operations.
//!
//! None of these are fatal: a failed action leaves the game state exactly as
//! it was, so a caller can treat any error as a no-op.

use thiserror::Error;

use crate::game::{Action, Phase};

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current phase.
    #[error("cannot {action} during {phase}")]
    InvalidAction {
        /// The rejected action.
        action: Action,
        /// The phase the round was in.
        phase: Phase,
    },
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur when dealing a round from a given deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards to deal: {remaining} remaining")]
    NotEnoughCards {
        /// Cards that were available.
        remaining: usize,
    },
}
