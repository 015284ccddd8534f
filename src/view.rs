//! Read model handed to a front end.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameState, Phase};
use crate::hand::calculate_score;
use crate::result::Outcome;

/// Index of the dealer's face-down card.
const HOLE_CARD: usize = 1;

/// A snapshot of everything the player is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current phase.
    pub phase: Phase,
    /// Outcome, once resolved.
    pub outcome: Option<Outcome>,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The player's score.
    pub player_score: u32,
    /// The dealer's visible cards.
    pub dealer_cards: Vec<Card>,
    /// Score of the dealer's visible cards.
    pub dealer_score: u32,
    /// Whether the dealer's hole card was left out of `dealer_cards`.
    pub hole_card_hidden: bool,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl TableView {
    /// Builds the view of `state`.
    ///
    /// With [`GameOptions::hide_hole_card`](crate::GameOptions::hide_hole_card)
    /// set, the dealer's second card stays hidden until the player stands.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let dealer = state.dealer().cards();
        let hole_card_hidden = state.options().hide_hole_card
            && matches!(state.phase(), Phase::Dealing | Phase::PlayerTurn)
            && dealer.len() > HOLE_CARD;

        let dealer_cards: Vec<Card> = if hole_card_hidden {
            dealer
                .iter()
                .enumerate()
                .filter(|&(index, _)| index != HOLE_CARD)
                .map(|(_, card)| *card)
                .collect()
        } else {
            dealer.to_vec()
        };

        Self {
            phase: state.phase(),
            outcome: state.outcome(),
            player_cards: state.player().cards().to_vec(),
            player_score: state.player_score(),
            dealer_score: calculate_score(&dealer_cards),
            dealer_cards,
            hole_card_hidden,
            cards_remaining: state.cards_remaining(),
        }
    }

    /// Returns the result message, once resolved.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::message)
    }
}
