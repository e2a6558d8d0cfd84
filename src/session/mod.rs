//! Interactive session: the caller layer around the basis optimizer.
//!
//! A session owns the player's hand and the requested book/run counts. The
//! optimizer only ever sees copies of the hand, so questions like "should I
//! buy this card?" never disturb it.
//!
//! ## Modules
//!
//! - `config`: Session settings, loadable from JSON
//! - `command`: Parsing of REPL command lines
//! - `advice`: Buy advice built from the optimizer entry points
//! - `repl`: The read-eval-print loop

pub mod advice;
pub mod command;
pub mod config;
pub mod repl;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;

use crate::bases::{missing_count, select_optimal_bases, BasisMap};
use crate::cards::{shuffled_hand, Card, Hand};

pub use advice::{advise_purchase, PurchaseAdvice};
pub use command::{Command, CommandError, SortOrder};
pub use config::{ConfigError, SessionConfig};
pub use repl::Repl;

/// Result of `build`: the chosen bases and how many cards are still needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Books requested.
    pub num_books: usize,
    /// Runs requested.
    pub num_runs: usize,
    /// Chosen bases, jokers included.
    pub bases: BasisMap,
    /// Cards still needed.
    pub missing: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bases)?;
        writeln!(f, "\nNumber of cards missing: {}", self.missing)
    }
}

/// State of one player's session.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    hand: Hand,
    num_decks: usize,
    num_books: usize,
    num_runs: usize,
    rng: StdRng,
}

impl Session {
    /// Start a session with an empty hand.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            hand: Hand::new(),
            num_decks: config.num_decks,
            num_books: config.num_books,
            num_runs: config.num_runs,
            config,
            rng,
        }
    }

    /// Settings the session started with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Decks random hands are drawn from.
    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    /// Books requested.
    pub fn num_books(&self) -> usize {
        self.num_books
    }

    /// Runs requested.
    pub fn num_runs(&self) -> usize {
        self.num_runs
    }

    /// Set the number of books requested.
    pub fn set_books(&mut self, num_books: usize) {
        self.num_books = num_books;
    }

    /// Set the number of runs requested.
    pub fn set_runs(&mut self, num_runs: usize) {
        self.num_runs = num_runs;
    }

    /// Set the deck count, or restore the configured one.
    pub fn set_decks(&mut self, num_decks: Option<usize>) {
        self.num_decks = num_decks.unwrap_or(self.config.num_decks);
    }

    /// Append `count` copies of a card to the hand.
    pub fn add(&mut self, card: Card, count: usize) {
        self.hand.add(card, count);
    }

    /// Replace the hand with a random one.
    ///
    /// Uses the configured hand size when `size` is `None`.
    pub fn deal(&mut self, size: Option<usize>) -> &Hand {
        let size = size.unwrap_or(self.config.hand_size);
        self.hand = shuffled_hand(size, self.num_decks, &mut self.rng);
        if self.hand.len() < size {
            warn!("{} cards requested but only {} in the shoe", size, self.hand.len());
        }
        info!("dealt {} cards from {} decks", self.hand.len(), self.num_decks);
        &self.hand
    }

    /// Would adding `card` reduce the cards missing?
    pub fn buy(&self, card: Card) -> PurchaseAdvice {
        advise_purchase(self.hand.cards(), card, self.num_books, self.num_runs)
    }

    /// Choose bases for the current hand and requested counts.
    pub fn build(&self) -> BuildReport {
        let bases = select_optimal_bases(self.hand.cards(), self.num_books, self.num_runs);
        let missing = missing_count(&bases, self.num_books, self.num_runs);
        debug!(
            "built {} books / {} runs from {} cards, {} missing",
            self.num_books,
            self.num_runs,
            self.hand.len(),
            missing
        );
        BuildReport {
            num_books: self.num_books,
            num_runs: self.num_runs,
            bases,
            missing,
        }
    }

    /// Score of the current hand.
    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    /// Sort the hand.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Rank => self.hand.sort_by_rank(),
            SortOrder::Suit => self.hand.sort_by_suit(),
        }
    }

    /// Empty the hand and restore configured counts.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.num_decks = self.config.num_decks;
        self.num_books = self.config.num_books;
        self.num_runs = self.config.num_runs;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
