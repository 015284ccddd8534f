use core::cmp::Ordering;

use log::{debug, info, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Action, GameState, Phase};

/// The result of advancing the dealer by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer stopped and the round resolved.
    Resolved(Outcome),
}

impl GameState {
    /// Returns whether the dealer policy asks for another card.
    ///
    /// The dealer draws below `dealer_stands_on` and, if `stand_on_soft_17`
    /// is off, also on a soft total equal to it.
    #[must_use]
    pub fn dealer_should_draw(&self) -> bool {
        let value = self.dealer.score();
        let target = u32::from(self.options.dealer_stands_on);

        match value.cmp(&target) {
            Ordering::Less => true,
            Ordering::Equal => self.dealer.is_soft() && !self.options.stand_on_soft_17,
            Ordering::Greater => false,
        }
    }

    pub(super) fn apply_dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        self.ensure_phase(Action::DealerStep, Phase::DealerTurn)?;

        if self.dealer_should_draw() {
            if let Some(card) = self.deck.deal() {
                self.dealer.add_card(card);
                debug!("dealer drew {card}, score {}", self.dealer.score());
                return Ok(DealerStep::Drew(card));
            }
            warn!(
                "deck exhausted during dealer turn, resolving with dealer at {}",
                self.dealer.score()
            );
        }

        let outcome = self.compare_scores();
        self.settle(outcome);
        Ok(DealerStep::Resolved(outcome))
    }

    fn compare_scores(&self) -> Outcome {
        let player_value = self.player.score();
        let dealer_value = self.dealer.score();

        if self.dealer.is_bust() {
            return Outcome::DealerBust;
        }
        match player_value.cmp(&dealer_value) {
            Ordering::Greater => Outcome::PlayerWin,
            Ordering::Less => Outcome::DealerWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub(super) fn settle(&mut self, outcome: Outcome) {
        info!(
            "round resolved: {outcome:?} (player {}, dealer {})",
            self.player.score(),
            self.dealer.score()
        );
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
    }

    /// Advances the dealer by one draw, or resolves the round once the dealer
    /// stands.
    ///
    /// Each call is one discrete, observable step. If the deck runs out while
    /// the dealer still wants a card, the round resolves with the current
    /// scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_step(&self) -> Result<(Self, DealerStep), ActionError> {
        let mut next = self.clone();
        let step = next.apply_dealer_step()?;
        Ok((next, step))
    }

    /// Player action: Stand, yielding every intermediate state of the
    /// dealer's turn.
    ///
    /// The iterator yields one state per card the dealer draws, then the
    /// resolved state, then ends. Pacing between items is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn reveal(&self) -> Result<DealerReveal, ActionError> {
        Ok(DealerReveal {
            current: Some(self.begin_stand()?),
        })
    }
}

/// Iterator over the states of a dealer's turn, created by [`GameState::reveal`].
#[derive(Debug, Clone)]
pub struct DealerReveal {
    current: Option<GameState>,
}

impl Iterator for DealerReveal {
    type Item = GameState;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let (next, step) = current.dealer_step().ok()?;
        if let DealerStep::Drew(_) = step {
            self.current = Some(next.clone());
        }
        Some(next)
    }
}
