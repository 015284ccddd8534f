//! Deck construction, shuffling, and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards, dealt from the front.
///
/// A deck is never replenished: its length only decreases as cards are dealt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with every suit/rank combination once, suit by suit.
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: Self::standard_cards().into(),
        }
    }

    /// Creates a deck of 52 unique cards in uniformly random order.
    ///
    /// Uses a Fisher-Yates shuffle, so every ordering is reachable.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::standard_cards();
        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck that deals `cards` in the given order, first element first.
    ///
    /// No uniqueness check is performed.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Deals the front card, or `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates over the remaining cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
