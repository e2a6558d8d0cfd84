//! Card, hand and deck representations.
//!
//! ## Modules
//!
//! - `card`: Card and suit types, scoring, and the `Card:<rank>:<SUIT>` encoding
//! - `hand`: An ordered hand of cards
//! - `deck`: 54-card decks, shuffling, and random hands

pub mod card;
pub mod deck;
pub mod hand;

// Re-export commonly used types
pub use card::{score, Card, CardError, Suit, RANK_ACE, RANK_JOKER, RANK_KING};
pub use deck::{shuffled_hand, Deck};
pub use hand::{jokers, Hand};
