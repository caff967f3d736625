//! Property tests for the blend search over small random catalogs.

use berry_blend::catalog::{Catalog, CatalogItem};
use berry_blend::constraints::ConstraintSet;
use berry_blend::flavor::{Flavor, FlavorVector};
use berry_blend::search::{
    Combination, FlavorWeights, Multiset, SearchConfig, SearchRunner, UnitScorer,
};
use proptest::prelude::*;

fn item_strategy(index: usize) -> impl Strategy<Value = CatalogItem> {
    (prop::array::uniform5(0u32..=60), 0u32..=40, 0u32..=3).prop_map(
        move |(flavors, calories, available)| {
            CatalogItem::new(
                format!("berry{index}"),
                FlavorVector::new(flavors, calories),
                available,
            )
        },
    )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    (1usize..=4)
        .prop_flat_map(|n| (0..n).map(item_strategy).collect::<Vec<_>>())
        .prop_map(|items| items.into_iter().collect())
}

fn constraints_strategy() -> impl Strategy<Value = ConstraintSet> {
    (
        prop::collection::vec((0usize..5, 0u32..=150, 0u32..=300), 0..3),
        0u8..=2,
        2u8..=5,
        prop::option::of((0usize..5, 0usize..5)),
    )
        .prop_map(|(ranges, star_min, star_max, balance)| {
            let mut set = ConstraintSet::new().with_star_range(star_min, star_max);
            for (flavor, min, span) in ranges {
                set = set.with_range(Flavor::ALL[flavor], min, min + span);
            }
            if let Some((a, b)) = balance {
                set = set.with_balance(Flavor::ALL[a], Flavor::ALL[b]);
            }
            set
        })
}

fn config_strategy() -> impl Strategy<Value = SearchConfig> {
    (3u32..=6, 1usize..=6).prop_map(|(max_units, max_results)| {
        SearchConfig::default()
            .with_max_units(max_units)
            .with_max_results(max_results)
    })
}

fn totals(combo: &Combination, catalog: &Catalog) -> FlavorVector {
    combo.iter().fold(FlavorVector::zero(), |acc, (name, &count)| {
        acc.add_scaled(&catalog.get(name).unwrap().stats, count)
    })
}

/// Every combination within availability and the unit window.
fn enumerate(catalog: &Catalog, min_units: u32, max_units: u32) -> Vec<Combination> {
    fn walk(
        items: &[CatalogItem],
        current: Combination,
        units: u32,
        min_units: u32,
        max_units: u32,
        out: &mut Vec<Combination>,
    ) {
        let Some((first, rest)) = items.split_first() else {
            if units >= min_units {
                out.push(current);
            }
            return;
        };
        for count in 0..=first.available.min(max_units - units) {
            walk(
                rest,
                current.clone().with(first.name.clone(), count),
                units + count,
                min_units,
                max_units,
                out,
            );
        }
    }

    let mut out = Vec::new();
    walk(catalog.items(), Combination::new(), 0, min_units, max_units, &mut out);
    out
}

fn best_feasible_score(
    catalog: &Catalog,
    constraints: &ConstraintSet,
    config: &SearchConfig,
    scorer: &FlavorWeights,
) -> Option<f64> {
    enumerate(catalog, config.min_units, config.max_units)
        .into_iter()
        .filter(|combo| constraints.is_satisfied(&totals(combo, catalog)))
        .map(|combo| {
            combo
                .iter()
                .map(|(name, &count)| scorer.unit_score(catalog.get(name).unwrap()) * count as f64)
                .sum::<f64>()
        })
        .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))
}

proptest! {
    #[test]
    fn returned_combinations_are_feasible(
        catalog in catalog_strategy(),
        constraints in constraints_strategy(),
        config in config_strategy(),
    ) {
        let result = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &config);

        for scored in &result.combinations {
            let combo = &scored.combination;
            prop_assert!(constraints.is_satisfied(&totals(combo, &catalog)), "{:?}", combo);
            prop_assert!(combo.total_units() >= config.min_units);
            prop_assert!(combo.total_units() <= config.max_units);
        }
    }

    #[test]
    fn returned_combinations_respect_availability(
        catalog in catalog_strategy(),
        constraints in constraints_strategy(),
        config in config_strategy(),
    ) {
        let result = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &config);

        for scored in &result.combinations {
            for (name, &count) in &scored.combination {
                let item = catalog.get(name).unwrap();
                prop_assert!(count <= item.available, "{} used {} of {}", name, count, item.available);
                prop_assert!(count > 0);
            }
        }
    }

    #[test]
    fn returned_combinations_are_mutually_non_dominated(
        catalog in catalog_strategy(),
        constraints in constraints_strategy(),
        config in config_strategy(),
    ) {
        let combos = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &config)
            .into_combinations();

        for (i, a) in combos.iter().enumerate() {
            for (j, b) in combos.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_submultiset_of(b), "{:?} dominates {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn result_count_is_bounded_and_sorted(
        catalog in catalog_strategy(),
        constraints in constraints_strategy(),
        config in config_strategy(),
    ) {
        let result = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &config);

        prop_assert!(result.len() <= config.max_results);
        for window in result.combinations.windows(2) {
            prop_assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn found_scores_never_exceed_true_optimum(
        catalog in catalog_strategy(),
        constraints in constraints_strategy(),
        config in config_strategy(),
    ) {
        let weights = FlavorWeights::default();
        let result = SearchRunner::run(&catalog, &constraints, &weights, &config);
        let optimum = best_feasible_score(&catalog, &constraints, &config, &weights);

        match (result.best(), optimum) {
            (Some(best), Some(opt)) => prop_assert!(best.score <= opt + 1e-9),
            (Some(best), None) => prop_assert!(false, "found {:?} but nothing is feasible", best),
            _ => {}
        }
    }

    /// Checks the constraint model against brute force; the engine's "helps"
    /// filter may skip blends, so it is not held to this.
    #[test]
    fn constraint_widening_never_lowers_brute_force_optimum(
        catalog in catalog_strategy(),
        config in config_strategy(),
        flavor in 0usize..5,
        min in 0u32..=150,
        span in 0u32..=200,
        widen in 0u32..=200,
        star_min in 0u8..=3,
        star_max in 2u8..=4,
    ) {
        let flavor = Flavor::ALL[flavor];
        let weights = FlavorWeights::default();
        let narrow = ConstraintSet::new()
            .with_range(flavor, min, min + span)
            .with_star_range(star_min, star_max);
        let wide = ConstraintSet::new()
            .with_range(flavor, min.saturating_sub(widen), min + span + widen)
            .with_star_range(star_min.saturating_sub(1), star_max + 1);

        let narrow_best = best_feasible_score(&catalog, &narrow, &config, &weights);
        let wide_best = best_feasible_score(&catalog, &wide, &config, &weights);

        if let Some(n) = narrow_best {
            let w = wide_best.expect("widening lost every feasible combination");
            prop_assert!(w >= n - 1e-9);
        }
    }

    #[test]
    fn zero_availability_yields_empty(
        catalog in catalog_strategy(),
        constraints in constraints_strategy(),
        config in config_strategy(),
    ) {
        let mut catalog = catalog;
        let names: Vec<String> = catalog.items().iter().map(|i| i.name.clone()).collect();
        for name in &names {
            catalog.set_available(name, 0);
        }

        let result = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &config);
        prop_assert!(result.is_empty());
    }
}

#[test]
fn single_berry_collapses_to_unit_floor() {
    let catalog = Catalog::new().with_item(CatalogItem::new(
        "X",
        FlavorVector::zero()
            .with_flavor(Flavor::Sweet, 100)
            .with_calories(50),
        8,
    ));
    let constraints = ConstraintSet::new()
        .with_range(Flavor::Sweet, 0, 760)
        .with_range(Flavor::Spicy, 0, 0)
        .with_range(Flavor::Sour, 0, 0)
        .with_range(Flavor::Bitter, 0, 0)
        .with_range(Flavor::Fresh, 0, 0)
        .with_star_range(0, 5);
    let config = SearchConfig::default().with_max_units(8);

    let combos = SearchRunner::run(&catalog, &constraints, &FlavorWeights::default(), &config)
        .into_combinations();

    assert_eq!(combos, vec![Combination::new().with("X", 3)]);
}

#[test]
fn mixed_blend_found_when_neither_berry_suffices() {
    let catalog = Catalog::new()
        .with_item(CatalogItem::new(
            "Sweetie",
            FlavorVector::zero().with_flavor(Flavor::Sweet, 50),
            6,
        ))
        .with_item(CatalogItem::new(
            "Zesty",
            FlavorVector::zero().with_flavor(Flavor::Spicy, 50),
            6,
        ));
    let constraints = ConstraintSet::new()
        .with_range(Flavor::Sweet, 100, 760)
        .with_range(Flavor::Spicy, 100, 760);

    let combos = SearchRunner::run(
        &catalog,
        &constraints,
        &FlavorWeights::default(),
        &SearchConfig::default(),
    )
    .into_combinations();

    assert_eq!(
        combos,
        vec![Combination::new().with("Sweetie", 2).with("Zesty", 2)]
    );
}
