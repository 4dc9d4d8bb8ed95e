use super::party::Party;
use crate::error::GameError;
use rand::prelude::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::iter::repeat;

/// Number of liberal policies in a standard deck.
pub const NUM_LIBERAL_POLICIES: usize = 6;
/// Number of fascist policies in a standard deck.
pub const NUM_FASCIST_POLICIES: usize = 11;
/// Total number of policies in a standard deck.
pub const NUM_POLICIES: usize = NUM_LIBERAL_POLICIES + NUM_FASCIST_POLICIES;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Deck {
    /// The draw pile; the top card is the last element
    draw: Vec<Party>,
    /// The discard pile
    discard: Vec<Party>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an empty deck that shuffles using the given generator.
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { draw: vec![], discard: vec![], rng }
    }

    /// Empties both piles, then fills the draw pile with a standard set of cards and shuffles.
    pub fn reset(&mut self) {
        self.draw.clear();
        self.discard.clear();
        let cards = repeat(Party::Liberal)
            .take(NUM_LIBERAL_POLICIES)
            .chain(repeat(Party::Fascist).take(NUM_FASCIST_POLICIES));
        for card in cards {
            self.add(card);
        }
        debug_assert_eq!(self.draw.len(), NUM_POLICIES);
        self.shuffle();
    }

    /// Places a card on top of the draw pile.
    pub fn add(&mut self, card: Party) {
        self.draw.push(card);
    }

    /// Removes the top card of the draw pile.
    pub fn remove(&mut self) -> Result<Party, GameError> {
        self.draw.pop().ok_or(GameError::EmptyDeck)
    }

    /// Reads the card `i` positions below the top of the draw pile.
    pub fn peek(&self, i: usize) -> Option<Party> {
        let len = self.draw.len();
        (i < len).then(|| self.draw[len - 1 - i])
    }

    /// Shuffles the draw pile in place.
    pub fn shuffle(&mut self) {
        self.draw.shuffle(&mut self.rng);
    }

    /// Draws the top three cards from the deck, topmost first.
    pub fn draw_three(&mut self) -> Result<[Party; 3], GameError> {
        let cards = self.peek_three()?;
        self.draw.truncate(self.draw.len() - 3);
        Ok(cards)
    }

    /// Peeks at the top three cards in the draw pile, topmost first.
    pub fn peek_three(&self) -> Result<[Party; 3], GameError> {
        match (self.peek(0), self.peek(1), self.peek(2)) {
            (Some(a), Some(b), Some(c)) => Ok([a, b, c]),
            _ => Err(GameError::NotEnoughCards),
        }
    }

    /// Places a card on the discard pile.
    pub fn discard(&mut self, card: Party) {
        self.discard.push(card);
    }

    /// Shuffles the discard pile into the deck, if there are fewer than three cards in the draw pile.
    pub fn check_shuffle(&mut self) -> bool {
        if self.draw.len() >= 3 {
            return false;
        }
        self.draw.append(&mut self.discard);
        self.shuffle();
        true
    }

    /// The number of cards in the draw pile.
    pub fn count(&self) -> usize {
        self.draw.len()
    }

    /// The number of cards in the discard pile.
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Counts the cards of the given type across both piles.
    #[cfg(test)]
    pub fn count_of(&self, party: Party) -> usize {
        self.draw.iter().chain(&self.discard).filter(|c| **c == party).count()
    }

    /// Replaces the draw pile, listed topmost first.
    #[cfg(test)]
    pub fn stack(&mut self, cards: &[Party]) {
        self.draw = cards.iter().rev().copied().collect();
    }

    /// Replaces the discard pile.
    #[cfg(test)]
    pub fn stack_discard(&mut self, cards: &[Party]) {
        self.discard = cards.to_vec();
    }
}
