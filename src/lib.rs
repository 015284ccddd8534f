//! A single-player blackjack engine with optional `no_std` support.
//!
//! [`GameState`] holds one round (deck, both hands, phase and outcome) and
//! exposes pure transitions: each action borrows the current state and
//! returns the next one. [`Game`] wraps a state and a seeded RNG behind a
//! lock for front ends that just forward hit, stand and restart.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let drawn = game.stand().unwrap();
//! assert_eq!(game.phase(), Phase::Resolved);
//! assert!(game.outcome().is_some());
//! assert_eq!(game.state().dealer().len(), 2 + drawn.len());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError};
pub use game::{Action, DealerReveal, DealerStep, Game, GameState, Phase};
pub use hand::{BLACKJACK, Hand, calculate_score, is_soft};
pub use options::GameOptions;
pub use result::{Outcome, Tone};
pub use view::TableView;
