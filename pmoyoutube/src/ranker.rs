//! Similarity-driven insertion ranking of fetched listing items
//!
//! Items arrive page by page in upload order, but callers want the entries
//! that resemble the remembered search term first. A full sort would lose
//! the discovery order between equally good matches, so the ranker instead
//! decides a position for each item as it arrives:
//!
//! - best matches (score at or above the running top score) go to the front,
//! - partial matches join a middle band just after the run of top matches,
//! - clear non-matches sink to the tail.
//!
//! The result is linear in item count, ties favor first-seen order, and no
//! item is ever dropped once inserted.

use crate::models::ListingItem;
use crate::similarity::score;
use tracing::{debug, trace};

/// Starting threshold for the front band; any score at or above it counts
/// as a top match until a better one raises the bar
const INITIAL_TOP_MATCH: u32 = 2;

/// Accumulator ordering fetched items by similarity to a baseline term
#[derive(Debug)]
pub struct ResultRanker {
    /// Term the titles are compared against
    baseline: String,
    /// Ranked accumulator, front band first
    items: Vec<ListingItem>,
    /// Length of the front band (insertion point of the middle band)
    match_count: usize,
    /// Best score seen so far
    top_match: u32,
}

impl ResultRanker {
    /// Create an empty ranker comparing titles against `baseline`
    pub fn new(baseline: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
            items: Vec::new(),
            match_count: 0,
            top_match: INITIAL_TOP_MATCH,
        }
    }

    /// Rank one fetched item into the accumulator
    ///
    /// Items without a readable title are skipped.
    pub fn consider(&mut self, item: ListingItem) {
        let matched = match item.title() {
            Some(title) => score(title, &self.baseline),
            None => {
                debug!("skipping listing item without a title");
                return;
            }
        };

        trace!(
            matched,
            match_count = self.match_count,
            top_match = self.top_match,
            accumulated = self.items.len(),
            "ranking item"
        );

        if self.items.is_empty() {
            if matched == 100 {
                self.match_count += 1;
            }
            self.items.push(item);
        } else if matched >= self.top_match {
            self.items.insert(0, item);
            self.match_count += 1;
        } else if matched > 1 {
            self.items.insert(self.match_count, item);
        } else {
            self.items.push(item);
        }

        if matched > self.top_match {
            self.top_match = matched;
        }
    }

    /// Whether anything has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of accumulated items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Consume the ranker, yielding the ranked items
    pub fn into_items(self) -> Vec<ListingItem> {
        self.items
    }
}
