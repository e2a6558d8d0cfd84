//! Basis search and selection.
//!
//! A *basis* is a candidate grouping of cards: a book (same rank) or a run
//! (same suit, adjacent ranks), complete or partial. This module finds the
//! bases a hand can offer, picks the construction order that leaves the
//! fewest cards missing, and fills incomplete bases with jokers.
//!
//! # Flow
//!
//! ```text
//! hand ──► RankIndex ──► find_book_bases ─┐
//!                   └──► find_run_bases ──┴─► select_optimal_bases ──► distribute_jokers
//!                                                (books-first vs runs-first)
//! ```
//!
//! ## Modules
//!
//! - `index`: Rank → cards index, optionally filtered by suit
//! - `book`: Book search
//! - `run`: Run search with ace wraparound
//! - `optimizer`: Strategy selection, joker distribution, missing counts

pub mod book;
pub mod index;
pub mod optimizer;
pub mod run;

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::cards::{self, Card};

pub use book::find_book_bases;
pub use index::RankIndex;
pub use optimizer::{distribute_jokers, missing_count, select_optimal_bases, Strategy};
pub use run::find_run_bases;

/// Cards needed to complete a book.
pub const MIN_BOOK_CARDS: usize = 3;
/// Cards needed to complete a run.
pub const MIN_RUN_CARDS: usize = 4;

/// A candidate book or run.
pub type Basis = Vec<Card>;

/// Order candidates best-first: larger bases first, then higher score.
///
/// The sort is stable, so equal candidates keep their search order.
pub fn sort_bases(bases: &mut [Basis]) {
    bases.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| cards::score(b).cmp(&cards::score(a)))
    });
}

/// Kind of grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BasisKind {
    /// Same-rank groupings.
    Books,
    /// Same-suit sequential groupings.
    Runs,
}

impl BasisKind {
    /// Cards needed to complete one grouping of this kind.
    pub fn min_cards(&self) -> usize {
        match self {
            BasisKind::Books => MIN_BOOK_CARDS,
            BasisKind::Runs => MIN_RUN_CARDS,
        }
    }

    /// Singular label (e.g. "Book").
    pub fn singular(&self) -> &'static str {
        match self {
            BasisKind::Books => "Book",
            BasisKind::Runs => "Run",
        }
    }

    /// Search `cards` for the best `count` bases of this kind.
    pub fn find(&self, cards: &[Card], count: usize) -> Vec<Basis> {
        match self {
            BasisKind::Books => find_book_bases(cards, count),
            BasisKind::Runs => find_run_bases(cards, count),
        }
    }

    /// Cards still needed to complete `count` groupings of this kind from `bases`.
    ///
    /// With `with_jokers`, every joker in `cards` is assumed to fill one gap.
    pub fn missing(&self, cards: &[Card], bases: &[Basis], count: usize, with_jokers: bool) -> usize {
        let jokers = if with_jokers { cards::jokers(cards).len() } else { 0 };
        let used: usize = bases.iter().map(Vec::len).sum();
        self.min_cards()
            .saturating_mul(count)
            .saturating_sub(used.saturating_add(jokers))
    }
}

impl fmt::Display for BasisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisKind::Books => write!(f, "Books"),
            BasisKind::Runs => write!(f, "Runs"),
        }
    }
}

/// Chosen bases per kind, books before runs, each list best-first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisMap {
    entries: BTreeMap<BasisKind, Vec<Basis>>,
}

impl BasisMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bases for a kind, replacing any previous entry.
    pub fn insert(&mut self, kind: BasisKind, bases: Vec<Basis>) {
        self.entries.insert(kind, bases);
    }

    /// Bases for a kind, if that kind was requested.
    pub fn get(&self, kind: BasisKind) -> Option<&[Basis]> {
        self.entries.get(&kind).map(Vec::as_slice)
    }

    /// Book bases, if books were requested.
    pub fn books(&self) -> Option<&[Basis]> {
        self.get(BasisKind::Books)
    }

    /// Run bases, if runs were requested.
    pub fn runs(&self) -> Option<&[Basis]> {
        self.get(BasisKind::Runs)
    }

    /// Iterate over `(kind, bases)` in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (BasisKind, &[Basis])> {
        self.entries.iter().map(|(&kind, bases)| (kind, bases.as_slice()))
    }

    pub(crate) fn iter_mut(&mut self) -> btree_map::IterMut<'_, BasisKind, Vec<Basis>> {
        self.entries.iter_mut()
    }

    /// Total cards across all bases of every kind.
    pub fn total_cards(&self) -> usize {
        self.entries.values().flatten().map(Vec::len).sum()
    }

    /// Check if no kind is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for BasisMap {
    /// One line per basis, e.g. `Book 1:\t[SPADE - ACE, HEART - ACE]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, bases) in self.iter() {
            for (i, basis) in bases.iter().enumerate() {
                let cards: Vec<String> = basis.iter().map(Card::to_string).collect();
                writeln!(f, "{} {}:\t[{}]", kind.singular(), i + 1, cards.join(", "))?;
            }
        }
        Ok(())
    }
}
