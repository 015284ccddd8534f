//! The owned state of a single round.

use log::debug;
use rand::Rng;

use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::view::TableView;

use super::{Action, Phase};

/// Cards dealt before the player's first decision.
pub const OPENING_CARDS: usize = 4;

/// Everything that makes up one round: the deck, both hands, the phase and
/// the outcome.
///
/// Transitions never mutate in place. Each one borrows the current state and
/// returns the next one, so a rejected action leaves the caller's value
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) deck: Deck,
    pub(super) player: Hand,
    pub(super) dealer: Hand,
    pub(super) outcome: Option<Outcome>,
    pub(super) phase: Phase,
    pub(super) options: GameOptions,
}

impl GameState {
    /// Shuffles a fresh deck and deals the opening cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, GameState, Phase};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let state = GameState::new(GameOptions::default(), &mut rng);
    /// assert_eq!(state.phase(), Phase::PlayerTurn);
    /// assert_eq!(state.player().len(), 2);
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a shuffled deck always holds enough cards for the opening deal"
    )]
    pub fn new<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        Self::from_deck(options, Deck::shuffled(rng))
            .expect("a full deck holds more than the opening cards")
    }

    /// Deals the opening cards from `deck`, alternating player and dealer.
    ///
    /// The player receives the first and third cards, the dealer the second
    /// and fourth.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn from_deck(options: GameOptions, mut deck: Deck) -> Result<Self, DealError> {
        if deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards {
                remaining: deck.len(),
            });
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for index in 0..OPENING_CARDS {
            let card = deck.deal().ok_or(DealError::NotEnoughCards { remaining: 0 })?;
            if index % 2 == 0 {
                player.add_card(card);
            } else {
                dealer.add_card(card);
            }
        }

        debug!(
            "dealt opening hands: player {} ({}), dealer {} ({}), {} cards left",
            player.score(),
            player.len(),
            dealer.score(),
            dealer.len(),
            deck.len()
        );

        Ok(Self {
            deck,
            player,
            dealer,
            outcome: None,
            phase: Phase::PlayerTurn,
            options,
        })
    }

    /// Starts a new round with a freshly shuffled deck and the same options.
    ///
    /// # Errors
    ///
    /// Returns an error while the dealer is playing out their hand.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self, ActionError> {
        self.restart_with(self.options, rng)
    }

    /// Starts a new round with a freshly shuffled deck and new options.
    ///
    /// # Errors
    ///
    /// Returns an error while the dealer is playing out their hand.
    pub fn restart_with<R: Rng + ?Sized>(
        &self,
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, ActionError> {
        if !self.phase.allows_restart() {
            return Err(self.reject(Action::Restart));
        }
        Ok(Self::new(options, rng))
    }

    pub(super) const fn reject(&self, action: Action) -> ActionError {
        ActionError::InvalidAction {
            action,
            phase: self.phase,
        }
    }

    pub(super) fn ensure_phase(&self, action: Action, phase: Phase) -> Result<(), ActionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome, once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's full hand, including the hole card.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the options this round was dealt with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player.score()
    }

    /// Returns the dealer's full score, including the hole card.
    #[must_use]
    pub fn dealer_score(&self) -> u32 {
        self.dealer.score()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns what a front end may show for this round.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::from_state(self)
    }
}
