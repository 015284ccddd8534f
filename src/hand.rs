//! Hand scoring and the hand container.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u32 = 21;

fn evaluate_cards(cards: &[Card]) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        value += u32::from(card.value());
    }

    // Demote aces from 11 to 1 until the hand fits.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the blackjack score of a set of cards.
///
/// Aces count as 11 and are demoted to 1 one at a time while the total is
/// over 21. An empty hand scores 0.
///
/// # Example
///
/// ```
/// use bjsolo::{Card, Rank, Suit, calculate_score};
///
/// let aces = [Card::new(Suit::Clubs, Rank::Ace), Card::new(Suit::Hearts, Rank::Ace)];
/// assert_eq!(calculate_score(&aces), 12);
/// ```
#[must_use]
pub fn calculate_score(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The cards held by one party, in the order they were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the score of the hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        calculate_score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
