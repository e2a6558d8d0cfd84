//! Book search: same-rank groupings.

use log::debug;

use super::index::RankIndex;
use super::{sort_bases, Basis, MIN_BOOK_CARDS};
use crate::cards::Card;

/// Find the best `num_books` book bases in `cards`.
///
/// Each rank is split into complete books of exactly three cards, and
/// whatever is left of the rank (zero to two cards) becomes one partial
/// basis. All candidates are sorted by size, then score, and the first
/// `num_books` are returned.
pub fn find_book_bases(cards: &[Card], num_books: usize) -> Vec<Basis> {
    let mut candidates = Vec::new();
    for (_, group) in RankIndex::build(cards, None) {
        let mut chunks = group.chunks_exact(MIN_BOOK_CARDS);
        candidates.extend(chunks.by_ref().map(<[Card]>::to_vec));
        candidates.push(chunks.remainder().to_vec());
    }
    debug!("book search: {} candidates for {} books", candidates.len(), num_books);

    sort_bases(&mut candidates);
    candidates.truncate(num_books);
    candidates
}
