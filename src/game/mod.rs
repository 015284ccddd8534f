//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::sync::Shared;
use crate::view::TableView;

mod actions;
mod dealer;
pub mod phase;
pub mod state;

pub use dealer::{DealerReveal, DealerStep};
pub use phase::{Action, Phase};
pub use state::GameState;

/// A blackjack table for a single player, driven by parameterless actions.
///
/// The game owns the current [`GameState`] and a seeded random number
/// generator. Every method takes `&self` and runs under the game's lock, so a
/// front end can forward hit, stand and restart requests straight through.
/// While the dealer is playing ([`Phase::DealerTurn`]) only
/// [`Game::dealer_step`] is accepted.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current round.
    state: Shared<GameState>,
    /// Random number generator.
    rng: Shared<ChaCha8Rng>,
    /// Number of rounds dealt so far.
    rounds_started: AtomicU32,
}

impl Game {
    /// Creates a new game with the given seed and deals the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(options, &mut rng);
        Self::assemble(options, state, rng)
    }

    /// Creates a game whose first round is dealt from `deck`.
    ///
    /// Later rounds are shuffled from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn from_deck(options: GameOptions, seed: u64, deck: Deck) -> Result<Self, DealError> {
        let state = GameState::from_deck(options, deck)?;
        Ok(Self::assemble(options, state, ChaCha8Rng::seed_from_u64(seed)))
    }

    const fn assemble(options: GameOptions, state: GameState, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            state: Shared::new(state),
            rng: Shared::new(rng),
            rounds_started: AtomicU32::new(1),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    /// The round is unchanged in either case.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.state.with(GameState::apply_hit)
    }

    /// Player action: Stand, then play the dealer's hand to the end.
    ///
    /// Returns the cards the dealer drew, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<Vec<Card>, ActionError> {
        self.state.with(|state| {
            state.apply_begin_stand()?;
            let mut drawn = Vec::new();
            while let DealerStep::Drew(card) = state.apply_dealer_step()? {
                drawn.push(card);
            }
            Ok(drawn)
        })
    }

    /// Ends the player's turn and hands control to the dealer.
    ///
    /// Call [`Game::dealer_step`] until it reports
    /// [`DealerStep::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn begin_stand(&self) -> Result<(), ActionError> {
        self.state.with(GameState::apply_begin_stand)
    }

    /// Advances the dealer by one draw, or resolves the round.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_step(&self) -> Result<DealerStep, ActionError> {
        self.state.with(GameState::apply_dealer_step)
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// The new round uses the current value of [`Game::options`].
    ///
    /// # Errors
    ///
    /// Returns an error while the dealer is playing out their hand.
    pub fn restart(&self) -> Result<(), ActionError> {
        self.state.with(|state| {
            let next = self.rng.with(|rng| state.restart_with(self.options, rng))?;
            *state = next;
            self.rounds_started.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    /// Returns a copy of the current round.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.with(|state| state.clone())
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.with(|state| state.phase())
    }

    /// Returns the outcome, once the round is resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.with(|state| state.outcome())
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.state.with(|state| state.player_score())
    }

    /// Returns the dealer's full score, including the hole card.
    #[must_use]
    pub fn dealer_score(&self) -> u32 {
        self.state.with(|state| state.dealer_score())
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.state.with(|state| state.cards_remaining())
    }

    /// Returns what a front end may show for the current round.
    #[must_use]
    pub fn view(&self) -> TableView {
        self.state.with(|state| state.view())
    }

    /// Returns how many rounds have been dealt, including the current one.
    #[must_use]
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started.load(Ordering::SeqCst)
    }
}
