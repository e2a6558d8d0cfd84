//! Decks of 54 cards (52 standard cards plus two jokers).

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::{Card, Suit, RANK_ACE, RANK_JOKER, RANK_KING};
use super::hand::Hand;

/// A shoe of one or more 54-card decks with dealing functionality.
#[derive(Clone)]
pub struct Deck {
    /// All cards in current order.
    cards: Vec<Card>,
    /// Index of next card to deal.
    index: usize,
    /// Number of decks combined.
    num_decks: usize,
}

impl Deck {
    /// Number of cards in a single deck.
    pub const SIZE: usize = 54;

    /// Most decks a single shoe may combine.
    pub const MAX_DECKS: usize = 100;

    /// Create a single deck in standard order.
    pub fn new() -> Self {
        Self::with_decks(1)
    }

    /// Create `num_decks` decks, each in standard order, one after another.
    ///
    /// Counts above [`Deck::MAX_DECKS`] are clamped to it.
    pub fn with_decks(num_decks: usize) -> Self {
        if num_decks > Self::MAX_DECKS {
            warn!("{} decks requested, using {}", num_decks, Self::MAX_DECKS);
        }
        let num_decks = num_decks.min(Self::MAX_DECKS);
        Self {
            cards: standard_order(num_decks),
            index: 0,
            num_decks,
        }
    }

    /// Shuffle the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards[self.index..].shuffle(rng);
    }

    /// Deal up to `n` cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let end = self.index.saturating_add(n).min(self.cards.len());
        let dealt = self.cards[self.index..end].to_vec();
        self.index = end;
        dealt
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }
}

/// Suits in canonical order, ace through king, then black and red jokers.
fn standard_order(num_decks: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(Deck::SIZE.checked_mul(num_decks).unwrap_or_default());
    for _ in 0..num_decks {
        for suit in Suit::ALL {
            if suit.is_joker() {
                cards.push(Card::new_unchecked(RANK_JOKER, suit));
            } else {
                cards.extend((RANK_ACE..=RANK_KING).map(|rank| Card::new_unchecked(rank, suit)));
            }
        }
    }
    cards
}

/// Draw a random hand of `num_cards` from `num_decks` shuffled decks.
///
/// The hand is capped at the number of cards available.
pub fn shuffled_hand<R: Rng>(num_cards: usize, num_decks: usize, rng: &mut R) -> Hand {
    let mut deck = Deck::with_decks(num_decks);
    deck.shuffle(rng);
    Hand::from_cards(deck.deal_n(num_cards))
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} decks, {} remaining)", self.num_decks, self.remaining())
    }
}
