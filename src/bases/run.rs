//! Run search: same-suit groupings of adjacent ranks.
//!
//! For each suit, the search looks for windows of four consecutive rank
//! positions around every remaining card and keeps the window alignment
//! that holds the most available ranks. Windows are accepted greedily,
//! largest first: every full four-card run is taken before any three-card
//! partial, and so on down to single leftover cards. Accepted cards are
//! consumed from the suit's index so they cannot appear in two bases.
//!
//! Aces are both low and high: a window position past the king maps back
//! to the ace.

use log::debug;

use super::index::RankIndex;
use super::{sort_bases, Basis, MIN_RUN_CARDS};
use crate::cards::{Card, Suit, RANK_ACE, RANK_JOKER};

/// How far left of the anchor rank a window may start.
const MAX_OFFSET: i32 = (MIN_RUN_CARDS - 1) as i32;

/// Find the best `num_runs` run bases in `cards`.
pub fn find_run_bases(cards: &[Card], num_runs: usize) -> Vec<Basis> {
    let mut candidates = Vec::new();
    for suit in Suit::RUN_ORDER {
        let mut index = RankIndex::build(cards, Some(suit));
        if index.is_empty() {
            continue;
        }
        for size in (1..=MIN_RUN_CARDS).rev() {
            candidates.extend(search_windows(&mut index, size));
        }
    }
    debug!("run search: {} candidates for {} runs", candidates.len(), num_runs);

    sort_bases(&mut candidates);
    candidates.truncate(num_runs);
    candidates
}

/// Repeatedly sweep the index for windows holding exactly `size` cards,
/// consuming each one found, until a full sweep finds nothing.
fn search_windows(index: &mut RankIndex, size: usize) -> Vec<Basis> {
    let mut found = Vec::new();
    loop {
        let mut progressed = false;
        for anchor in index.ranks() {
            if index.available(anchor).is_none() {
                continue;
            }
            let window = best_window(index, anchor);
            if window.len() == size {
                index.consume(&window);
                found.push(window);
                progressed = true;
            }
        }
        if !progressed {
            return found;
        }
    }
}

/// The fullest four-position window containing `anchor`.
///
/// Alignments are tried from three positions left of the anchor up to the
/// anchor itself; on a tie the leftmost alignment wins.
fn best_window(index: &RankIndex, anchor: u8) -> Vec<Card> {
    let mut best = Vec::new();
    for offset in -MAX_OFFSET..=0 {
        let window: Vec<Card> = (0..MIN_RUN_CARDS as i32)
            .filter_map(|step| {
                let rank = match i32::from(anchor) + offset + step {
                    r if r == i32::from(RANK_JOKER) => i32::from(RANK_ACE),
                    r => r,
                };
                u8::try_from(rank).ok().and_then(|r| index.available(r))
            })
            .collect();
        if window.len() > best.len() {
            best = window;
        }
    }
    best
}
