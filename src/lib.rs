//! # Rummy Solver
//!
//! A card-game assistant for rummy-style games played with one or more
//! 54-card decks. Given a hand and a number of required *books* (three or
//! more cards of one rank) and *runs* (four or more adjacent cards of one
//! suit), it finds the groupings that leave the fewest cards missing and
//! says whether picking up a given card would help.
//!
//! ## Quick Start
//!
//! ```
//! use rummy_solver::bases::{missing_count, select_optimal_bases};
//! use rummy_solver::cards::Card;
//!
//! let hand: Vec<Card> = ["Card:2:SPADE", "Card:3:SPADE", "Card:4:SPADE"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let bases = select_optimal_bases(&hand, 0, 1);
//! assert_eq!(missing_count(&bases, 0, 1), 1);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: Cards, hands, decks and scoring
//! - [`bases`]: Book and run search, strategy selection, joker distribution
//! - [`session`]: Session state, configuration and the interactive REPL
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Session / REPL (caller)                     │
//! │  - Hand and requested counts   - Buy advice                     │
//! │  - Command parsing             - Build reports                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ copies of the hand
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Basis optimizer                          │
//! │  books-first vs runs-first  ──►  joker distribution             │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │                               │
//!                 ▼                               ▼
//!          ┌─────────────┐                 ┌─────────────┐
//!          │ Book search │                 │ Run search  │
//!          └─────────────┘                 └─────────────┘
//!                 └──────────► RankIndex ◄────────┘
//! ```

#![warn(missing_docs)]

/// Card, hand and deck types.
pub mod cards;

/// Basis search and selection.
///
/// This is the core module: everything else feeds it a hand and renders
/// what it returns.
pub mod bases;

/// Interactive session layer.
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use bases::{missing_count, select_optimal_bases, BasisKind, BasisMap};
pub use cards::{score, Card, CardError, Hand, Suit};
pub use session::{Session, SessionConfig};
