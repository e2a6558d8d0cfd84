//! Basis selection across books and runs.
//!
//! When both books and runs are requested, the order in which they are
//! built matters: cards claimed by one kind are unavailable to the other.
//! Both orders are evaluated on independent copies of the hand and the one
//! leaving fewer cards missing is kept. Jokers are then handed out to the
//! incomplete bases of the winner.

use log::debug;

use super::{Basis, BasisKind, BasisMap};
use crate::cards::{self, Card};

/// Construction order for a hand needing both books and runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Build books, then runs from what is left.
    BooksFirst,
    /// Build runs, then books from what is left.
    RunsFirst,
}

impl Strategy {
    /// Strategies in evaluation order. Earlier strategies win ties.
    pub const ALL: [Strategy; 2] = [Strategy::BooksFirst, Strategy::RunsFirst];

    /// Kinds in the order this strategy builds them.
    pub fn order(&self) -> [BasisKind; 2] {
        match self {
            Strategy::BooksFirst => [BasisKind::Books, BasisKind::Runs],
            Strategy::RunsFirst => [BasisKind::Runs, BasisKind::Books],
        }
    }

    /// Build both kinds in this strategy's order from a private copy of `cards`.
    ///
    /// Returns the bases and the summed per-kind missing count.
    pub fn evaluate(&self, cards: &[Card], num_books: usize, num_runs: usize) -> (BasisMap, usize) {
        let mut remaining = cards.to_vec();
        let mut bases = BasisMap::new();
        let mut missing: usize = 0;
        for kind in self.order() {
            let count = match kind {
                BasisKind::Books => num_books,
                BasisKind::Runs => num_runs,
            };
            let found = kind.find(&remaining, count);
            missing = missing.saturating_add(kind.missing(&remaining, &found, count, false));
            remove_bases(&mut remaining, &found);
            bases.insert(kind, found);
        }
        (bases, missing)
    }
}

/// Choose bases for `num_books` books and `num_runs` runs from `cards`.
///
/// The result holds a `Books` entry only when books were requested and a
/// `Runs` entry only when runs were requested. Jokers in `cards` are
/// distributed into the chosen bases before returning. `cards` is never
/// modified.
pub fn select_optimal_bases(cards: &[Card], num_books: usize, num_runs: usize) -> BasisMap {
    let mut bases = BasisMap::new();
    if num_runs == 0 {
        if num_books > 0 {
            bases.insert(BasisKind::Books, BasisKind::Books.find(cards, num_books));
        }
    } else if num_books == 0 {
        bases.insert(BasisKind::Runs, BasisKind::Runs.find(cards, num_runs));
    } else {
        let mut best: Option<(BasisMap, usize)> = None;
        for strategy in Strategy::ALL {
            let (candidate, missing) = strategy.evaluate(cards, num_books, num_runs);
            debug!("{:?}: {} cards missing", strategy, missing);
            if best.as_ref().map_or(true, |(_, least)| missing < *least) {
                best = Some((candidate, missing));
            }
        }
        if let Some((chosen, _)) = best {
            bases = chosen;
        }
    }

    distribute_jokers(&mut bases, cards::jokers(cards));
    bases
}

/// Top up incomplete bases with jokers, front of the pool first.
///
/// Kinds are visited in map order and bases best-first. Each basis takes
/// jokers until it reaches its kind's minimum size. Bases already at or
/// above the minimum are left alone. Stops as soon as the pool runs dry.
pub fn distribute_jokers(bases: &mut BasisMap, jokers: Vec<Card>) {
    let mut pool = jokers.into_iter();
    for (kind, group) in bases.iter_mut() {
        for basis in group.iter_mut() {
            while basis.len() < kind.min_cards() {
                let Some(joker) = pool.next() else {
                    return;
                };
                basis.push(joker);
            }
        }
    }
}

/// Cards still needed to complete `num_books` books and `num_runs` runs.
pub fn missing_count(bases: &BasisMap, num_books: usize, num_runs: usize) -> usize {
    let required = BasisKind::Books
        .min_cards()
        .saturating_mul(num_books)
        .saturating_add(BasisKind::Runs.min_cards().saturating_mul(num_runs));
    required.saturating_sub(bases.total_cards())
}

/// Remove one matching card from `cards` for every card in `bases`.
fn remove_bases(cards: &mut Vec<Card>, bases: &[Basis]) {
    for card in bases.iter().flatten() {
        if let Some(pos) = cards.iter().position(|c| c == card) {
            cards.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit).unwrap()
    }

    fn suited(ranks: &[u8], suit: Suit) -> Vec<Card> {
        ranks.iter().map(|&r| card(r, suit)).collect()
    }

    #[test]
    fn test_books_only() {
        let mut hand = vec![card(1, Suit::Spade); 3];
        hand.extend(vec![card(1, Suit::Heart); 3]);
        let bases = select_optimal_bases(&hand, 1, 0);
        assert_eq!(bases.books(), Some(&[vec![card(1, Suit::Spade); 3]][..]));
        assert!(bases.runs().is_none());
        assert_eq!(missing_count(&bases, 1, 0), 0);
    }

    #[test]
    fn test_runs_only() {
        let hand = suited(&[2, 3, 4], Suit::Spade);
        let bases = select_optimal_bases(&hand, 0, 1);
        assert!(bases.books().is_none());
        assert_eq!(bases.runs(), Some(&[hand.clone()][..]));
        assert_eq!(missing_count(&bases, 0, 1), 1);
    }

    #[test]
    fn test_lone_joker_has_nowhere_to_go() {
        let hand = vec![Card::RED_JOKER];
        let bases = select_optimal_bases(&hand, 1, 0);
        assert_eq!(bases.books().map(<[Basis]>::len), Some(0));
        assert_eq!(missing_count(&bases, 1, 0), 3);
        assert_eq!(BasisKind::Books.missing(&hand, &[], 1, true), 2);
    }

    #[test]
    fn test_nothing_requested() {
        let hand = suited(&[2, 3, 4], Suit::Spade);
        let bases = select_optimal_bases(&hand, 0, 0);
        assert!(bases.is_empty());
        assert_eq!(missing_count(&bases, 0, 0), 0);
        assert!(select_optimal_bases(&[], 2, 1).iter().all(|(_, b)| b.is_empty()));
    }

    #[test]
    fn test_huge_counts_saturate() {
        let hand = suited(&[2, 3, 4], Suit::Spade);
        let bases = select_optimal_bases(&hand, usize::MAX, usize::MAX);
        assert_eq!(missing_count(&bases, usize::MAX, usize::MAX), usize::MAX - 3);
        assert_eq!(missing_count(&bases, usize::MAX, 0), usize::MAX - 3);
    }

    #[test]
    fn test_tied_orders_keep_books_first() {
        // Books-first takes the three fives, leaving hearts 3, 4, 6 (one short).
        // Runs-first takes hearts 3-6, leaving a pair of fives (one short).
        let mut hand = suited(&[3, 4, 5, 6], Suit::Heart);
        hand.extend([card(5, Suit::Club), card(5, Suit::Spade)]);

        let (books_first, books_missing) = Strategy::BooksFirst.evaluate(&hand, 1, 1);
        let (runs_first, runs_missing) = Strategy::RunsFirst.evaluate(&hand, 1, 1);
        assert_eq!(books_missing, 1);
        assert_eq!(runs_missing, 1);
        assert_eq!(books_first.books().map(|b| b[0].len()), Some(3));
        assert_eq!(runs_first.runs(), Some(&[suited(&[3, 4, 5, 6], Suit::Heart)][..]));

        assert_eq!(select_optimal_bases(&hand, 1, 1), books_first);
    }

    #[test]
    fn test_strictly_better_order_is_chosen() {
        // Books-first claims the seven of spades and breaks the run.
        // Runs-first keeps the run and still has three sevens left.
        let mut hand = suited(&[7, 8, 9, 10], Suit::Spade);
        hand.extend([card(7, Suit::Club), card(7, Suit::Diamond), card(7, Suit::Heart)]);

        let (_, books_missing) = Strategy::BooksFirst.evaluate(&hand, 1, 1);
        let (runs_first, runs_missing) = Strategy::RunsFirst.evaluate(&hand, 1, 1);
        assert_eq!(books_missing, 1);
        assert_eq!(runs_missing, 0);

        let bases = select_optimal_bases(&hand, 1, 1);
        assert_eq!(bases, runs_first);
        assert_eq!(
            bases.books(),
            Some(&[vec![card(7, Suit::Club), card(7, Suit::Diamond), card(7, Suit::Heart)]][..])
        );
        assert_eq!(missing_count(&bases, 1, 1), 0);
    }

    #[test]
    fn test_selection_does_not_touch_hand() {
        let mut hand = suited(&[9, 10, 11, 12], Suit::Diamond);
        hand.extend([card(9, Suit::Club), card(9, Suit::Heart), Card::BLACK_JOKER]);
        let before = hand.clone();
        let first = select_optimal_bases(&hand, 2, 1);
        let second = select_optimal_bases(&hand, 2, 1);
        assert_eq!(hand, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_jokers_fill_in_order() {
        let mut bases = BasisMap::new();
        bases.insert(BasisKind::Books, vec![vec![card(8, Suit::Club); 4], vec![card(2, Suit::Club)]]);
        bases.insert(BasisKind::Runs, vec![suited(&[5, 6], Suit::Heart)]);

        distribute_jokers(&mut bases, vec![Card::RED_JOKER, Card::BLACK_JOKER, Card::RED_JOKER]);

        let books = bases.books().unwrap();
        assert_eq!(books[0].len(), 4, "complete bases are untouched");
        assert_eq!(books[1], vec![card(2, Suit::Club), Card::RED_JOKER, Card::BLACK_JOKER]);
        assert_eq!(
            bases.runs().unwrap()[0],
            vec![card(5, Suit::Heart), card(6, Suit::Heart), Card::RED_JOKER]
        );
        assert_eq!(missing_count(&bases, 2, 1), 0);
    }

    #[test]
    fn test_jokers_run_out() {
        let mut bases = BasisMap::new();
        bases.insert(BasisKind::Books, vec![vec![], vec![card(3, Suit::Spade)]]);
        bases.insert(BasisKind::Runs, vec![vec![card(3, Suit::Heart)]]);
        let before = missing_count(&bases, 2, 1);

        distribute_jokers(&mut bases, vec![Card::BLACK_JOKER, Card::RED_JOKER]);

        let books = bases.books().unwrap();
        assert_eq!(books[0], vec![Card::BLACK_JOKER, Card::RED_JOKER]);
        assert_eq!(books[1], vec![card(3, Suit::Spade)]);
        assert_eq!(bases.runs().unwrap()[0], vec![card(3, Suit::Heart)]);
        assert_eq!(missing_count(&bases, 2, 1), before - 2);
    }

    #[test]
    fn test_hand_jokers_are_distributed() {
        let hand = vec![card(6, Suit::Spade), card(6, Suit::Heart), Card::BLACK_JOKER];
        let bases = select_optimal_bases(&hand, 1, 0);
        assert_eq!(
            bases.books(),
            Some(&[vec![card(6, Suit::Spade), card(6, Suit::Heart), Card::BLACK_JOKER]][..])
        );
        assert_eq!(missing_count(&bases, 1, 0), 0);
    }

    #[test]
    fn test_missing_never_grows_with_more_cards() {
        let pool = [
            card(4, Suit::Heart),
            card(5, Suit::Heart),
            card(4, Suit::Club),
            card(6, Suit::Heart),
            card(4, Suit::Spade),
            card(7, Suit::Heart),
            card(12, Suit::Diamond),
        ];
        for (books, runs) in [(1, 0), (0, 1), (2, 0), (0, 2)] {
            let mut hand = Vec::new();
            let mut last = missing_count(&select_optimal_bases(&hand, books, runs), books, runs);
            for &c in &pool {
                hand.push(c);
                let now = missing_count(&select_optimal_bases(&hand, books, runs), books, runs);
                assert!(now <= last, "{} > {} after adding {:?}", now, last, c);
                last = now;
            }
        }
    }
}
