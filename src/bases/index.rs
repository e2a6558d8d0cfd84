//! Rank index shared by book and run search.

use std::collections::BTreeMap;

use crate::cards::{Card, Suit};

/// Cards grouped by rank, ascending.
///
/// Jokers are never indexed. A rank is present only while it still holds
/// at least one card, so consuming the last card of a rank drops the rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankIndex {
    ranks: BTreeMap<u8, Vec<Card>>,
}

impl RankIndex {
    /// Index all non-joker cards, optionally keeping only one suit.
    pub fn build(cards: &[Card], suit: Option<Suit>) -> Self {
        let mut ranks: BTreeMap<u8, Vec<Card>> = BTreeMap::new();
        for &card in cards {
            if card.is_joker() || suit.map_or(false, |s| card.suit() != s) {
                continue;
            }
            ranks.entry(card.rank()).or_default().push(card);
        }
        Self { ranks }
    }

    /// First remaining card of a rank.
    pub fn available(&self, rank: u8) -> Option<Card> {
        self.ranks.get(&rank).and_then(|cards| cards.first()).copied()
    }

    /// Ranks currently holding cards, ascending.
    pub fn ranks(&self) -> Vec<u8> {
        self.ranks.keys().copied().collect()
    }

    /// Remove one matching card per entry of `cards`.
    pub fn consume(&mut self, cards: &[Card]) {
        for card in cards {
            let rank = card.rank();
            if let Some(group) = self.ranks.get_mut(&rank) {
                if let Some(pos) = group.iter().position(|c| c == card) {
                    group.remove(pos);
                }
                if group.is_empty() {
                    self.ranks.remove(&rank);
                }
            }
        }
    }

    /// Check if no cards remain.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl IntoIterator for RankIndex {
    type Item = (u8, Vec<Card>);
    type IntoIter = std::collections::btree_map::IntoIter<u8, Vec<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.into_iter()
    }
}
