//! Bounded skyline of non-dominated combinations.
//!
//! A member dominates a candidate when it is a submultiset of it: the
//! smaller blend reaches feasibility with no more of any berry, so it wins
//! regardless of score. Within that skyline the set keeps the
//! `capacity` best scores, sorted descending, ties in insertion order.

use super::types::Multiset;

#[derive(Debug, Clone)]
struct Entry<M> {
    item: M,
    score: f64,
}

/// Score-ranked result set that never holds two comparable multisets.
///
/// # Examples
///
/// ```
/// use berry_blend::search::{Combination, ResultSet};
///
/// let mut set = ResultSet::new(2);
/// assert!(set.try_insert(Combination::new().with("a", 2).with("b", 1), 5.0));
/// // A strict submultiset evicts its superset.
/// assert!(set.try_insert(Combination::new().with("a", 2), 1.0));
/// assert_eq!(set.len(), 1);
/// // Supersets of a member are rejected.
/// assert!(!set.try_insert(Combination::new().with("a", 3), 9.0));
/// ```
#[derive(Debug, Clone)]
pub struct ResultSet<M> {
    entries: Vec<Entry<M>>,
    capacity: usize,
}

impl<M: Multiset> ResultSet<M> {
    /// Creates an empty set holding at most `capacity` members.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Lowest retained score.
    pub fn worst_score(&self) -> Option<f64> {
        self.entries.last().map(|entry| entry.score)
    }

    /// Highest retained score.
    pub fn best_score(&self) -> Option<f64> {
        self.entries.first().map(|entry| entry.score)
    }

    /// True if some member is a submultiset of (or equal to) `candidate`.
    pub fn dominates_any(&self, candidate: &M) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.item.is_submultiset_of(candidate))
    }

    /// Offers a candidate. Returns whether it was kept.
    ///
    /// 1. When full, a score no better than the worst member is rejected.
    /// 2. A candidate equal to or dominated by a member is rejected.
    /// 3. Members the candidate dominates are evicted.
    /// 4. The candidate is placed by score and the set truncated to capacity.
    ///
    /// Scores are ordered with [`f64::total_cmp`], so NaN never breaks the
    /// sort.
    pub fn try_insert(&mut self, candidate: M, score: f64) -> bool {
        if self.capacity == 0 {
            return false;
        }
        let not_better = self
            .worst_score()
            .is_some_and(|worst| score.total_cmp(&worst).is_le());
        if self.is_full() && not_better {
            return false;
        }

        if self.dominates_any(&candidate) {
            return false;
        }

        let before = self.entries.len();
        self.entries
            .retain(|entry| !candidate.is_submultiset_of(&entry.item));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!(evicted, score, "skyline evicted dominated supersets");
        }

        let pos = self
            .entries
            .partition_point(|entry| entry.score.total_cmp(&score).is_ge());
        self.entries.insert(
            pos,
            Entry {
                item: candidate,
                score,
            },
        );
        self.entries.truncate(self.capacity);
        true
    }

    /// Members with scores, best first.
    pub fn iter(&self) -> impl Iterator<Item = (&M, f64)> + '_ {
        self.entries.iter().map(|entry| (&entry.item, entry.score))
    }

    /// Consumes the set, returning members with scores, best first.
    pub fn into_sorted_vec(self) -> Vec<(M, f64)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.item, entry.score))
            .collect()
    }
}
