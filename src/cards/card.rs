//! Card representation for rummy-style games.
//!
//! This module provides the fundamental card types used throughout the solver:
//! - `Suit`: The four standard suits plus the two joker colours
//! - `Card`: A single validated playing card with rank and suit
//! - `CardError`: Construction and parsing failures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rank of an ace (played low or high in runs).
pub const RANK_ACE: u8 = 1;
/// Rank of a king.
pub const RANK_KING: u8 = 13;
/// Rank shared by both jokers.
pub const RANK_JOKER: u8 = 14;

/// Rank names for display, indexed by rank - 1.
const RANK_NAMES: [&str; 14] = [
    "ACE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "JACK",
    "QUEEN", "KING", "JOKER",
];

/// Prefix of the machine-readable card encoding.
const ENCODING_TAG: &str = "Card";

/// Suit of a card, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    /// Spades.
    Spade,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// The black joker.
    BlackJoker,
    /// The red joker.
    RedJoker,
}

impl Suit {
    /// Every suit in canonical order.
    pub const ALL: [Suit; 6] = [
        Suit::Spade,
        Suit::Club,
        Suit::Heart,
        Suit::Diamond,
        Suit::BlackJoker,
        Suit::RedJoker,
    ];

    /// Order in which run search visits suits.
    ///
    /// This order decides which of two otherwise equal run candidates
    /// comes first after the stable size/score sort.
    pub const RUN_ORDER: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Club, Suit::Spade];

    /// Check if this is one of the two joker suits.
    #[inline]
    pub fn is_joker(&self) -> bool {
        matches!(self, Suit::BlackJoker | Suit::RedJoker)
    }

    /// Upper-snake name used in encodings (e.g. `BLACK_JOKER`).
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Spade => "SPADE",
            Suit::Club => "CLUB",
            Suit::Heart => "HEART",
            Suit::Diamond => "DIAMOND",
            Suit::BlackJoker => "BLACK_JOKER",
            Suit::RedJoker => "RED_JOKER",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .iter()
            .copied()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| CardError::Encoding(format!("could not parse suit: {}", s)))
    }
}

/// Errors raised when building or parsing a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// Rank is outside 1-14.
    InvalidRank(u8),
    /// Rank 14 without a joker suit, or a joker suit without rank 14.
    JokerMismatch {
        /// Offending rank.
        rank: u8,
        /// Offending suit.
        suit: Suit,
    },
    /// Textual identifier is not of the form `Card:<rank>:<SUIT>`.
    Encoding(String),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::InvalidRank(rank) => write!(f, "Invalid card rank: {}", rank),
            CardError::JokerMismatch { rank, suit } if *rank == RANK_JOKER => {
                write!(f, "Card rank is {} but suit is {}", rank, suit)
            }
            CardError::JokerMismatch { rank, .. } => {
                write!(f, "Card suit is a joker but rank is {}", rank)
            }
            CardError::Encoding(msg) => write!(f, "Bad card encoding: {}", msg),
        }
    }
}

impl std::error::Error for CardError {}

/// A single playing card.
///
/// Cards from different decks are not distinguished: two cards with the
/// same rank and suit compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// The black joker.
    pub const BLACK_JOKER: Card = Card { rank: RANK_JOKER, suit: Suit::BlackJoker };
    /// The red joker.
    pub const RED_JOKER: Card = Card { rank: RANK_JOKER, suit: Suit::RedJoker };

    /// Create a card, checking that rank and suit agree on joker-ness.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if !(RANK_ACE..=RANK_JOKER).contains(&rank) {
            return Err(CardError::InvalidRank(rank));
        }
        if (rank == RANK_JOKER) != suit.is_joker() {
            return Err(CardError::JokerMismatch { rank, suit });
        }
        Ok(Self { rank, suit })
    }

    /// Create a card from values already known to be valid.
    #[inline]
    pub(crate) fn new_unchecked(rank: u8, suit: Suit) -> Self {
        debug_assert!(Self::new(rank, suit).is_ok(), "invalid card {}:{}", rank, suit);
        Self { rank, suit }
    }

    /// Get the card's rank (1-13, or 14 for jokers).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Check if this card is a joker.
    #[inline]
    pub fn is_joker(&self) -> bool {
        self.rank == RANK_JOKER
    }

    /// Point value of the card: ace 15, 2-9 5, 10-K 10, joker 50.
    pub fn score(&self) -> u32 {
        match self.rank {
            RANK_ACE => 15,
            2..=9 => 5,
            10..=RANK_KING => 10,
            _ => 50,
        }
    }

    /// Rank name for display (e.g. "ACE", "TEN").
    pub fn rank_name(&self) -> &'static str {
        RANK_NAMES[(self.rank - 1) as usize]
    }

    /// Machine-readable form `Card:<rank>:<SUIT>`.
    pub fn encode(&self) -> String {
        format!("{}:{}:{}", ENCODING_TAG, self.rank, self.suit)
    }
}

/// Sum of card scores.
pub fn score(cards: &[Card]) -> u32 {
    cards.iter().map(Card::score).sum()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Suit::BlackJoker => write!(f, "{} - BLACK", self.rank_name()),
            Suit::RedJoker => write!(f, "{} - RED", self.rank_name()),
            suit => write!(f, "{} - {}", suit, self.rank_name()),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parse a card from its encoding, e.g. `Card:1:SPADE` or `Card:14:RED_JOKER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(CardError::Encoding(format!(
                "unexpected number of fields: {}",
                parts.len()
            )));
        }
        if parts[0] != ENCODING_TAG {
            return Err(CardError::Encoding(format!(
                "encoding should start with '{}'",
                ENCODING_TAG
            )));
        }
        let rank = parts[1]
            .parse::<u8>()
            .map_err(|_| CardError::Encoding(format!("could not parse rank: {}", parts[1])))?;
        let suit = parts[2].parse::<Suit>()?;
        Card::new(rank, suit).map_err(|e| CardError::Encoding(e.to_string()))
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.encode()
    }
}
