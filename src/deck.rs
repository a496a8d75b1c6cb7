//! A single 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::GameError;

/// An ordered single deck of cards.
///
/// A fresh deck holds each of the 52 canonical (suit, rank) combinations
/// exactly once. The only mutations are [`shuffle`](Self::shuffle) (reorder)
/// and [`deal`](Self::deal) (remove and return the top card), so a deck
/// instance can never deal the same card twice.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck with the 52 canonical cards.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The last card in `cards` is dealt first. Useful for stacking known
    /// deals in tests or replays.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ExhaustedDeck`] if no cards remain. Under the
    /// round structure this engine enforces (two participants, one deck) a
    /// round consumes well under the 52 cards available, so hitting this
    /// error indicates a logic error in the caller rather than a recoverable
    /// condition.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::ExhaustedDeck)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
