//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! Berries are ranked once by [`branch_order`]. The search then walks a
//! binary decision tree: at berry `i` it either takes one more unit of `i`
//! (staying at `i`, so quantities repeat) or moves past `i` for good.
//! Every node runs, in order:
//!
//! 1. Score bound: when the result set is full and even filling every
//!    remaining unit with the best remaining berry cannot beat the worst
//!    kept score, stop.
//! 2. Dominance: when a kept result is a submultiset of the current blend,
//!    stop. Every descendant is a superset of it too. Taking before
//!    skipping means a walk meets its own results before their supersets,
//!    so this fires only for results already in the set when the walk
//!    starts.
//! 3. Acceptance: with at least `min_units` units and every constraint met,
//!    offer the blend to the result set and stop. Extensions would only be
//!    supersets.
//! 4. Hopeless: with at least one unit, stop if the remaining budget cannot
//!    reach some lower bound, or an upper bound or star ceiling is broken.
//! 5. Exhaustion: stop past the last berry or at `max_units`.
//! 6. Take (if the berry helps and availability remains), then skip.
//!
//! Steps 1 and 2 never change the outcome: every leaf they cut would have
//! been rejected by the result set anyway. Step 6's "helps" filter is a
//! heuristic and may skip feasible blends.

use crate::catalog::Catalog;
use crate::constraints::{star_tier, ConstraintSet};
use crate::error::BlendError;
use crate::flavor::{Flavor, FlavorVector};

use super::config::SearchConfig;
use super::ordering::branch_order;
use super::skyline::ResultSet;
use super::types::{Combination, Multiset, ScoredCombination, UnitScorer};

/// Counters describing how much of the tree was explored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Decision nodes entered.
    pub nodes: u64,
    /// Blends that met every constraint and were offered to the result set.
    pub accepted: u64,
    /// Subtrees cut by the score bound.
    pub pruned_by_score: u64,
    /// Subtrees cut because a kept result is a submultiset.
    pub pruned_by_dominance: u64,
    /// Subtrees cut by the hopeless test.
    pub pruned_hopeless: u64,
    /// "Take" branches skipped because the berry did not help.
    pub skipped_unhelpful: u64,
}

impl SearchStats {
    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.accepted += other.accepted;
        self.pruned_by_score += other.pruned_by_score;
        self.pruned_by_dominance += other.pruned_by_dominance;
        self.pruned_hopeless += other.pruned_hopeless;
        self.skipped_unhelpful += other.skipped_unhelpful;
    }
}

/// Result of a blend search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Kept combinations, best score first.
    pub combinations: Vec<ScoredCombination>,
    /// Exploration counters.
    pub stats: SearchStats,
}

impl SearchResult {
    /// The bare combinations, best score first.
    pub fn into_combinations(self) -> Vec<Combination> {
        self.combinations
            .into_iter()
            .map(|scored| scored.combination)
            .collect()
    }

    pub fn best(&self) -> Option<&ScoredCombination> {
        self.combinations.first()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }
}

/// Blend search runner.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SearchConfig::validate`]
    /// or use [`try_run`](Self::try_run) to get a descriptive error).
    ///
    /// # Examples
    ///
    /// ```
    /// use berry_blend::catalog::{Catalog, CatalogItem};
    /// use berry_blend::constraints::ConstraintSet;
    /// use berry_blend::flavor::{Flavor, FlavorVector};
    /// use berry_blend::search::{FlavorWeights, SearchConfig, SearchRunner};
    ///
    /// let catalog = Catalog::new()
    ///     .with_item(CatalogItem::new("Cheri", FlavorVector::zero().with_flavor(Flavor::Spicy, 40), 4))
    ///     .with_item(CatalogItem::new("Pecha", FlavorVector::zero().with_flavor(Flavor::Sweet, 40), 4));
    /// let constraints = ConstraintSet::new()
    ///     .with_range(Flavor::Spicy, 80, 760)
    ///     .with_range(Flavor::Sweet, 40, 760);
    ///
    /// let result = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &SearchConfig::default());
    /// let best = &result.best().unwrap().combination;
    /// assert_eq!(best.count("Cheri"), 2);
    /// assert_eq!(best.count("Pecha"), 1);
    /// ```
    pub fn run<S: UnitScorer + ?Sized>(
        catalog: &Catalog,
        constraints: &ConstraintSet,
        scorer: &S,
        config: &SearchConfig,
    ) -> SearchResult {
        config.validate().expect("invalid SearchConfig");
        Self::execute(catalog, constraints, scorer, config)
    }

    /// Runs the search, returning an error for an invalid configuration.
    pub fn try_run<S: UnitScorer + ?Sized>(
        catalog: &Catalog,
        constraints: &ConstraintSet,
        scorer: &S,
        config: &SearchConfig,
    ) -> Result<SearchResult, BlendError> {
        config.validate()?;
        Ok(Self::execute(catalog, constraints, scorer, config))
    }

    fn execute<S: UnitScorer + ?Sized>(
        catalog: &Catalog,
        constraints: &ConstraintSet,
        scorer: &S,
        config: &SearchConfig,
    ) -> SearchResult {
        let plan = Plan::new(catalog, constraints, scorer, config);
        tracing::info!(
            event = "search_start",
            items = plan.branches.len(),
            max_units = config.max_units,
            max_results = config.max_results,
        );

        let mut explorer = Explorer::new(&plan);
        explorer.explore(0, FlavorVector::zero(), 0.0, 0);

        let stats = explorer.stats;
        let result = plan.finish(explorer.results.into_sorted_vec(), stats);
        tracing::info!(
            event = "search_end",
            results = result.combinations.len(),
            nodes = stats.nodes,
            accepted = stats.accepted,
        );
        result
    }

    /// Runs the search with each first-taken berry's subtree on its own
    /// rayon task, then merges the per-subtree results.
    ///
    /// Subtrees rooted at different first berries are independent given a
    /// fixed branch order. Every kept combination satisfies the same
    /// guarantees as [`run`](Self::run); which of several equal-scoring
    /// combinations survive truncation may differ.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<S: UnitScorer + ?Sized>(
        catalog: &Catalog,
        constraints: &ConstraintSet,
        scorer: &S,
        config: &SearchConfig,
    ) -> SearchResult {
        use rayon::prelude::*;

        config.validate().expect("invalid SearchConfig");
        let plan = Plan::new(catalog, constraints, scorer, config);
        tracing::info!(
            event = "search_start",
            items = plan.branches.len(),
            max_units = config.max_units,
            max_results = config.max_results,
            parallel = true,
        );

        let partials: Vec<(Vec<(UnitCounts, f64)>, SearchStats)> = (0..plan.branches.len())
            .into_par_iter()
            .map(|first| {
                let mut explorer = Explorer::new(&plan);
                explorer.explore_from(first);
                (explorer.results.into_sorted_vec(), explorer.stats)
            })
            .collect();

        let mut merged = ResultSet::new(config.max_results);
        let mut stats = SearchStats::default();
        for (entries, partial_stats) in partials {
            stats.merge(&partial_stats);
            for (counts, score) in entries {
                merged.try_insert(counts, score);
            }
        }

        let result = plan.finish(merged.into_sorted_vec(), stats);
        tracing::info!(
            event = "search_end",
            results = result.combinations.len(),
            nodes = stats.nodes,
            accepted = stats.accepted,
            parallel = true,
        );
        result
    }
}

/// One berry in branch order, with its score precomputed.
#[derive(Debug, Clone)]
struct Branch {
    catalog_pos: usize,
    stats: FlavorVector,
    available: u32,
    score: f64,
}

/// Immutable per-search data shared by every explorer.
struct Plan<'a> {
    catalog: &'a Catalog,
    constraints: &'a ConstraintSet,
    config: &'a SearchConfig,
    branches: Vec<Branch>,
    /// `best_from[i]`: best non-negative unit score among branches `i..`.
    best_from: Vec<f64>,
}

impl<'a> Plan<'a> {
    fn new<S: UnitScorer + ?Sized>(
        catalog: &'a Catalog,
        constraints: &'a ConstraintSet,
        scorer: &S,
        config: &'a SearchConfig,
    ) -> Self {
        let branches: Vec<Branch> = branch_order(catalog, constraints)
            .into_iter()
            .map(|pos| {
                let item = &catalog.items()[pos];
                Branch {
                    catalog_pos: pos,
                    stats: item.stats,
                    available: item.available,
                    score: finite_unit_score(scorer.unit_score(item), config.max_units),
                }
            })
            .collect();

        tracing::debug!(
            order = ?branches
                .iter()
                .map(|b| catalog.items()[b.catalog_pos].name.as_str())
                .collect::<Vec<_>>(),
            "branch order"
        );

        let mut best_from = vec![0.0_f64; branches.len() + 1];
        for i in (0..branches.len()).rev() {
            best_from[i] = best_from[i + 1].max(branches[i].score);
        }

        Self {
            catalog,
            constraints,
            config,
            branches,
            best_from,
        }
    }

    fn to_combination(&self, counts: &UnitCounts) -> Combination {
        counts
            .0
            .iter()
            .zip(self.branches.iter())
            .filter(|(count, _)| **count > 0)
            .map(|(&count, branch)| (self.catalog.items()[branch.catalog_pos].name.clone(), count))
            .collect()
    }

    fn finish(&self, entries: Vec<(UnitCounts, f64)>, stats: SearchStats) -> SearchResult {
        SearchResult {
            combinations: entries
                .iter()
                .map(|(counts, score)| ScoredCombination {
                    combination: self.to_combination(counts),
                    score: *score,
                })
                .collect(),
            stats,
        }
    }
}

/// Clamps a unit score so that any sum of `max_units` of them stays finite.
/// NaN counts as the lowest score.
fn finite_unit_score(score: f64, max_units: u32) -> f64 {
    let limit = f64::MAX / (f64::from(max_units) + 1.0);
    if score.is_nan() {
        -limit
    } else {
        score.clamp(-limit, limit)
    }
}

/// Dense per-branch unit counts; the engine's working combination.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UnitCounts(Vec<u32>);

impl Multiset for UnitCounts {
    fn is_submultiset_of(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }
}

/// Mutable state of one depth-first walk.
struct Explorer<'p, 'a> {
    plan: &'p Plan<'a>,
    results: ResultSet<UnitCounts>,
    counts: UnitCounts,
    stats: SearchStats,
}

impl<'p, 'a> Explorer<'p, 'a> {
    fn new(plan: &'p Plan<'a>) -> Self {
        Self {
            plan,
            results: ResultSet::new(plan.config.max_results),
            counts: UnitCounts(vec![0; plan.branches.len()]),
            stats: SearchStats::default(),
        }
    }

    /// Explores only the subtree whose first taken unit is branch `first`.
    #[cfg(feature = "parallel")]
    fn explore_from(&mut self, first: usize) {
        let branch = &self.plan.branches[first];
        let (stats, score) = (branch.stats, branch.score);
        self.counts.0[first] = 1;
        self.explore(first, FlavorVector::zero().add(&stats), score, 1);
        self.counts.0[first] = 0;
    }

    fn explore(&mut self, index: usize, total: FlavorVector, score: f64, units: u32) {
        let plan = self.plan;
        let config = plan.config;
        let constraints = plan.constraints;
        self.stats.nodes += 1;

        if let Some(worst) = self.results.worst_score().filter(|_| self.results.is_full()) {
            let remaining = f64::from(config.max_units - units);
            if score + remaining * plan.best_from[index.min(plan.branches.len())] <= worst {
                self.stats.pruned_by_score += 1;
                return;
            }
        }

        if self.results.dominates_any(&self.counts) {
            self.stats.pruned_by_dominance += 1;
            return;
        }

        if units >= config.min_units && constraints.is_satisfied(&total) {
            self.stats.accepted += 1;
            self.results.try_insert(self.counts.clone(), score);
            return;
        }

        if units > 0
            && constraints.is_hopeless(
                &total,
                config.max_units - units,
                config.max_unit_contribution,
            )
        {
            self.stats.pruned_hopeless += 1;
            return;
        }

        if index >= plan.branches.len() || units >= config.max_units {
            return;
        }

        let branch = &plan.branches[index];
        if self.helps(branch, &total, units) {
            if self.counts.0[index] < branch.available {
                let mut next = total;
                next.add_assign(&branch.stats);
                self.counts.0[index] += 1;
                self.explore(index, next, score + branch.score, units + 1);
                self.counts.0[index] -= 1;
            }
        } else {
            self.stats.skipped_unhelpful += 1;
        }

        self.explore(index + 1, total, score, units);
    }

    /// Cheap filter: does taking another unit of `branch` plausibly move
    /// the blend toward its constraints?
    fn helps(&self, branch: &Branch, total: &FlavorVector, units: u32) -> bool {
        let constraints = self.plan.constraints;
        constraints.balance().is_some()
            || star_tier(total) < constraints.star_range().min
            || units < self.plan.config.min_units
            || Flavor::ALL
                .iter()
                .any(|&flavor| constraints.needs(total, flavor) && branch.stats.flavor(flavor) > 0)
    }
}
