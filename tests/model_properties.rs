//! Property tests for the encoder and the evaluator.

use proptest::prelude::*;
use u_qubo::evaluate::Evaluator;
use u_qubo::instance::{ForbiddenPair, Instance, Item};
use u_qubo::model::{Calibration, ModelBuilder, ModelConfig};
use u_qubo::solver::{ExhaustiveSampler, Sample, Sampler};

/// Small random instances (exhaustively solvable) with a capacity.
fn instance_strategy() -> impl Strategy<Value = (Instance, i64)> {
    (2usize..=10)
        .prop_flat_map(|n| {
            (
                prop::collection::vec((100i64..=1000, 1i64..=100, 0u32..4), n),
                prop::collection::vec((0..n, 0..n), 0..6),
                0i64..=500,
            )
        })
        .prop_map(|(items, pairs, capacity)| {
            let items = items
                .into_iter()
                .map(|(v, w, c)| Item::new(v, w, c))
                .collect();
            let pairs: Vec<ForbiddenPair> = pairs
                .into_iter()
                .filter_map(|(a, b)| ForbiddenPair::new(a, b))
                .collect();
            (Instance::new(items, pairs).unwrap(), capacity)
        })
}

fn calibrated(instance: &Instance, capacity: i64) -> ModelConfig {
    Calibration::default()
        .calibrate(instance, &ModelConfig::default().with_capacity(capacity))
        .unwrap()
}

fn bits_for(instance: &Instance, raw: &[bool]) -> Vec<bool> {
    raw.iter().copied().cycle().take(instance.len()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn same_category_coupling_dominates_values((instance, capacity) in instance_strategy()) {
        let config = calibrated(&instance, capacity);
        let model = ModelBuilder::new(&instance, &config).build().unwrap();
        for (i, j) in instance.same_category_pairs() {
            let gain = config.objective_weight
                * (instance.item(i).value + instance.item(j).value) as f64;
            prop_assert!(model.coupling(i, j) > gain);
        }
    }

    #[test]
    fn taboo_coupling_dominates_values((instance, capacity) in instance_strategy()) {
        let config = calibrated(&instance, capacity);
        let model = ModelBuilder::new(&instance, &config).build().unwrap();
        for pair in instance.forbidden_pairs() {
            let (i, j) = (pair.low(), pair.high());
            let gain = config.objective_weight
                * (instance.item(i).value + instance.item(j).value) as f64;
            prop_assert!(config.taboo_penalty > gain);
            prop_assert!(model.coupling(i, j) > gain);
        }
    }

    #[test]
    fn build_is_idempotent_and_symmetric((instance, capacity) in instance_strategy()) {
        let config = calibrated(&instance, capacity);
        let a = ModelBuilder::new(&instance, &config).build().unwrap();
        let b = ModelBuilder::new(&instance, &config).build().unwrap();
        prop_assert_eq!(&a, &b);
        for i in 0..a.len() {
            prop_assert_eq!(a.coupling(i, i), 0.0);
            for j in 0..a.len() {
                prop_assert_eq!(a.coupling(i, j), a.coupling(j, i));
            }
        }
    }

    #[test]
    fn energy_matches_penalized_objective(
        (instance, capacity) in instance_strategy(),
        raw in prop::collection::vec(any::<bool>(), 1..10),
    ) {
        let config = calibrated(&instance, capacity);
        let model = ModelBuilder::new(&instance, &config).build().unwrap();
        let bits = bits_for(&instance, &raw);
        let report = Evaluator::new(&instance, capacity)
            .evaluate(&Sample::new(bits.clone(), 0.0))
            .unwrap();

        let excess = (report.total_weight - capacity) as f64;
        let expected = -config.objective_weight * report.total_value as f64
            + config.mass_penalty * excess * excess
            + config.category_penalty * report.category_conflicts.len() as f64
            + config.taboo_penalty * report.taboo_violations.len() as f64;
        let got = model.energy(&bits).unwrap() + model.offset();
        // Magnitude of everything summed, so cancellation does not shrink
        // the tolerance below rounding error.
        let mut scale = model.offset().abs() + expected.abs() + 1.0;
        for i in report.selected.iter().copied() {
            scale += model.linear(i).abs();
            for j in report.selected.iter().copied().filter(|&j| j > i) {
                scale += model.coupling(i, j).abs();
            }
        }
        prop_assert!((got - expected).abs() <= 1e-9 * scale, "{} vs {}", got, expected);
    }

    #[test]
    fn evaluator_totals_sum_exactly_the_selection(
        (instance, capacity) in instance_strategy(),
        raw in prop::collection::vec(any::<bool>(), 1..10),
    ) {
        let bits = bits_for(&instance, &raw);
        let report = Evaluator::new(&instance, capacity)
            .evaluate(&Sample::new(bits.clone(), 0.0))
            .unwrap();
        let selected: Vec<usize> = (0..bits.len()).filter(|&i| bits[i]).collect();
        prop_assert_eq!(&report.selected, &selected);
        let value: i64 = selected.iter().map(|&i| instance.item(i).value).sum();
        let weight: i64 = selected.iter().map(|&i| instance.item(i).weight).sum();
        prop_assert_eq!(report.total_value, value);
        prop_assert_eq!(report.total_weight, weight);
        prop_assert_eq!(report.mass_ok, weight <= capacity);
    }

    #[test]
    fn exact_minimum_respects_pair_rules((instance, capacity) in instance_strategy()) {
        let config = calibrated(&instance, capacity);
        let model = ModelBuilder::new(&instance, &config).build().unwrap();
        let samples = ExhaustiveSampler::new().sample(&model).unwrap();
        let report = Evaluator::new(&instance, capacity).evaluate_best(&samples).unwrap();
        prop_assert!(report.category_ok, "conflicts: {:?}", report.category_conflicts);
        prop_assert!(report.taboo_ok, "violations: {:?}", report.taboo_violations);
    }
}
