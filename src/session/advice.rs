//! Buy advice: would picking up a card help?

use serde::Serialize;

use crate::bases::{missing_count, select_optimal_bases};
use crate::cards::Card;

/// Missing-card counts before and after taking a candidate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseAdvice {
    /// Card under consideration.
    pub card: Card,
    /// Cards missing with the current hand.
    pub missing_before: usize,
    /// Cards missing with the candidate added.
    pub missing_after: usize,
}

impl PurchaseAdvice {
    /// Buy only if the card strictly reduces the missing count.
    pub fn should_buy(&self) -> bool {
        self.missing_after < self.missing_before
    }
}

/// Compare missing counts with and without `card`, using a copy of `hand`.
pub fn advise_purchase(hand: &[Card], card: Card, num_books: usize, num_runs: usize) -> PurchaseAdvice {
    let missing_before = missing_count(&select_optimal_bases(hand, num_books, num_runs), num_books, num_runs);

    let mut with_card = hand.to_vec();
    with_card.push(card);
    let missing_after =
        missing_count(&select_optimal_bases(&with_card, num_books, num_runs), num_books, num_runs);

    PurchaseAdvice { card, missing_before, missing_after }
}
