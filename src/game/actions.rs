use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Action, DealerStep, GameState, Phase};

impl GameState {
    /// Draws a card for the player, resolving the round if they bust.
    pub(super) fn apply_hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_phase(Action::Hit, Phase::PlayerTurn)?;

        let card = self.deck.deal().ok_or(ActionError::DeckExhausted)?;
        self.player.add_card(card);

        let score = self.player.score();
        debug!("player drew {card}, score {score}");

        if self.player.is_bust() {
            self.settle(Outcome::PlayerBust);
        }

        Ok(card)
    }

    pub(super) fn apply_begin_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_phase(Action::Stand, Phase::PlayerTurn)?;
        debug!("player stands on {}", self.player.score());
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A score over 21 ends the round with [`Outcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn or the deck
    /// is empty. The current state is left unchanged in both cases.
    pub fn hit(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.apply_hit()?;
        Ok(next)
    }

    /// Player action: Stand, then play the dealer's hand to the end.
    ///
    /// The returned state is always [`Phase::Resolved`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn stand(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.apply_begin_stand()?;
        while let DealerStep::Drew(_) = next.apply_dealer_step()? {}
        Ok(next)
    }

    /// Ends the player's turn without drawing for the dealer.
    ///
    /// Drive the dealer with [`GameState::dealer_step`] or use
    /// [`GameState::reveal`] to get every intermediate state.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn begin_stand(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.apply_begin_stand()?;
        Ok(next)
    }
}
