//! Independent feasibility check of sampler output.
//!
//! Penalties in the cost model only bias the search, so every rule is
//! re-checked here directly against the instance.

mod report;

pub use report::Report;

use crate::error::{QuboError, Result};
use crate::instance::Instance;
use crate::solver::{Sample, SampleSet};
use std::collections::HashMap;
use tracing::warn;

/// Decodes samples into [`Report`]s.
pub struct Evaluator<'a> {
    instance: &'a Instance,
    capacity: i64,
}

impl<'a> Evaluator<'a> {
    pub fn new(instance: &'a Instance, capacity: i64) -> Self {
        Self { instance, capacity }
    }

    /// Evaluates one sample.
    ///
    /// # Errors
    ///
    /// [`QuboError::DimensionMismatch`] if the sample length differs from
    /// the item count.
    pub fn evaluate(&self, sample: &Sample) -> Result<Report> {
        let bits = &sample.bits;
        if bits.len() != self.instance.len() {
            return Err(QuboError::DimensionMismatch {
                expected: self.instance.len(),
                actual: bits.len(),
            });
        }

        let selected = sample.selected();
        let items = self.instance.items();
        let total_value: i64 = selected.iter().map(|&i| items[i].value).sum();
        let total_weight: i64 = selected.iter().map(|&i| items[i].weight).sum();

        let mut seen_by_category: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut category_conflicts = Vec::new();
        for &j in &selected {
            let seen = seen_by_category.entry(items[j].category).or_default();
            category_conflicts.extend(seen.iter().map(|&i| (i, j)));
            seen.push(j);
        }
        category_conflicts.sort_unstable();

        let taboo_violations: Vec<_> = self
            .instance
            .forbidden_pairs()
            .iter()
            .filter(|p| p.is_violated_by(bits))
            .copied()
            .collect();

        Ok(Report {
            selected,
            total_value,
            total_weight,
            capacity: self.capacity,
            energy: sample.energy,
            mass_ok: total_weight <= self.capacity,
            category_ok: category_conflicts.is_empty(),
            taboo_ok: taboo_violations.is_empty(),
            category_conflicts,
            taboo_violations,
        })
    }

    /// Evaluates the lowest-energy sample (first-seen on ties).
    ///
    /// # Errors
    ///
    /// [`QuboError::Solver`] if the set is empty.
    pub fn evaluate_best(&self, samples: &SampleSet) -> Result<Report> {
        let best = samples
            .lowest()
            .ok_or_else(|| QuboError::Solver("sampler returned no samples".into()))?;
        let report = self.evaluate(best)?;
        if !report.is_feasible() {
            warn!(
                mass_ok = report.mass_ok,
                category_ok = report.category_ok,
                taboo_ok = report.taboo_ok,
                overweight = report.overweight(),
                "best sample violates a rule; penalties may be under-tuned"
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;

    fn instance() -> Instance {
        Instance::from_pairs(
            vec![
                Item::new(900, 30, 0),
                Item::new(800, 30, 0),
                Item::new(400, 20, 1),
                Item::new(300, 60, 0),
            ],
            &[(1, 2)],
        )
        .unwrap()
    }

    fn sample(bits: &[bool]) -> Sample {
        Sample::new(bits.to_vec(), -1.0)
    }

    #[test]
    fn test_totals() {
        let inst = instance();
        let report = Evaluator::new(&inst, 100)
            .evaluate(&sample(&[true, false, true, false]))
            .unwrap();
        assert_eq!(report.selected, vec![0, 2]);
        assert_eq!(report.total_value, 1300);
        assert_eq!(report.total_weight, 50);
        assert!(report.is_feasible());
    }

    #[test]
    fn test_category_conflicts_listed() {
        let inst = instance();
        let report = Evaluator::new(&inst, 1000)
            .evaluate(&sample(&[true, true, false, true]))
            .unwrap();
        assert!(!report.category_ok);
        assert_eq!(report.category_conflicts, vec![(0, 1), (0, 3), (1, 3)]);
        assert!(report.mass_ok);
        assert!(report.taboo_ok);
    }

    #[test]
    fn test_taboo_violation() {
        let inst = instance();
        let report = Evaluator::new(&inst, 1000)
            .evaluate(&sample(&[false, true, true, false]))
            .unwrap();
        assert!(!report.taboo_ok);
        assert_eq!(report.taboo_violations.len(), 1);
        assert!(report.category_ok);
    }

    #[test]
    fn test_mass_violation() {
        let inst = instance();
        let report = Evaluator::new(&inst, 70)
            .evaluate(&sample(&[false, false, true, true]))
            .unwrap();
        assert_eq!(report.total_weight, 80);
        assert!(!report.mass_ok);
        assert_eq!(report.overweight(), 10);
    }

    #[test]
    fn test_empty_selection_always_feasible() {
        let inst = instance();
        let report = Evaluator::new(&inst, 0)
            .evaluate(&sample(&[false; 4]))
            .unwrap();
        assert!(report.is_feasible());
        assert_eq!(report.total_value, 0);
    }

    #[test]
    fn test_length_mismatch() {
        let inst = instance();
        let err = Evaluator::new(&inst, 100).evaluate(&sample(&[true]));
        assert!(matches!(err, Err(QuboError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_best_uses_lowest_energy() {
        let inst = instance();
        let set = SampleSet::new(vec![
            Sample::new(vec![true, false, false, false], -10.0),
            Sample::new(vec![false, false, true, false], -20.0),
            Sample::new(vec![true, false, true, false], -20.0),
        ]);
        let report = Evaluator::new(&inst, 100).evaluate_best(&set).unwrap();
        assert_eq!(report.selected, vec![2]);
        assert_eq!(report.energy, -20.0);
    }

    #[test]
    fn test_best_ignores_energy_for_feasibility() {
        // A very low energy does not make an infeasible selection pass.
        let inst = instance();
        let set = SampleSet::new(vec![Sample::new(vec![true, true, true, true], -1e9)]);
        let report = Evaluator::new(&inst, 100).evaluate_best(&set).unwrap();
        assert!(!report.is_feasible());
    }

    #[test]
    fn test_best_empty_set() {
        let inst = instance();
        let err = Evaluator::new(&inst, 100).evaluate_best(&SampleSet::default());
        assert!(matches!(err, Err(QuboError::Solver(_))));
    }
}
