//! A player's hand of cards.
//!
//! The hand is an ordered sequence that may hold duplicate cards when
//! several decks are in play.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{self, Card};

/// An ordered, owned hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create an empty hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Create a hand from cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Get the cards in the hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append `count` copies of a card.
    pub fn add(&mut self, card: Card, count: usize) {
        self.cards.extend(std::iter::repeat(card).take(count));
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Total score of the hand.
    pub fn score(&self) -> u32 {
        card::score(&self.cards)
    }

    /// Sort by rank, then suit. Jokers end up last.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by_key(|c| (c.rank(), c.suit()));
    }

    /// Sort by suit, then rank.
    pub fn sort_by_suit(&mut self) {
        self.cards.sort_by_key(|c| (c.suit(), c.rank()));
    }
}

/// All jokers in a slice of cards, in order.
pub fn jokers(cards: &[Card]) -> Vec<Card> {
    cards.iter().copied().filter(Card::is_joker).collect()
}

impl fmt::Display for Hand {
    /// Numbered listing, one card per line, or `empty`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return writeln!(f, "empty");
        }
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "{}.\t{}", i + 1, card)?;
        }
        Ok(())
    }
}
