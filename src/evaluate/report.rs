//! Evaluation report.

use crate::instance::ForbiddenPair;
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE: &str = "-----------------------------------";

/// Ground-truth view of one selection.
///
/// Every field is recomputed from the instance data; `energy` is carried
/// only for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Selected item indices, ascending.
    pub selected: Vec<usize>,
    pub total_value: i64,
    pub total_weight: i64,
    pub capacity: i64,
    /// Energy the sampler reported for this assignment.
    pub energy: f64,
    /// Mass ceiling: `total_weight <= capacity`.
    pub mass_ok: bool,
    /// At most one selected item per category.
    pub category_ok: bool,
    /// No forbidden pair fully selected.
    pub taboo_ok: bool,
    /// Selected same-category pairs `(i, j)`, `i < j`.
    pub category_conflicts: Vec<(usize, usize)>,
    /// Forbidden pairs with both members selected.
    pub taboo_violations: Vec<ForbiddenPair>,
}

impl Report {
    /// Whether all three rules hold.
    pub fn is_feasible(&self) -> bool {
        self.mass_ok && self.category_ok && self.taboo_ok
    }

    /// Weight above the capacity, or 0.
    pub fn overweight(&self) -> i64 {
        (self.total_weight - self.capacity).max(0)
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- QUBO Optimization Results ---")?;
        writeln!(f, "Lowest Energy: {:.2}", self.energy)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Selected Items: {:?}", self.selected)?;
        writeln!(f, "Total Value: {}", self.total_value)?;
        writeln!(
            f,
            "Total Weight: {} (Max: {})",
            self.total_weight, self.capacity
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Mass ceiling:         {}", verdict(self.mass_ok))?;
        writeln!(f, "One per category:     {}", verdict(self.category_ok))?;
        writeln!(f, "No taboo pairs:       {}", verdict(self.taboo_ok))?;
        if !self.category_conflicts.is_empty() {
            writeln!(f, "Category conflicts: {:?}", self.category_conflicts)?;
        }
        if !self.taboo_violations.is_empty() {
            let pairs: Vec<(usize, usize)> = self
                .taboo_violations
                .iter()
                .map(|p| (p.low(), p.high()))
                .collect();
            writeln!(f, "Taboo violations: {pairs:?}")?;
        }
        write!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            selected: vec![1, 4],
            total_value: 1200,
            total_weight: 80,
            capacity: 100,
            energy: -1234.5,
            mass_ok: true,
            category_ok: true,
            taboo_ok: true,
            category_conflicts: vec![],
            taboo_violations: vec![],
        }
    }

    #[test]
    fn test_display_format() {
        let text = report().to_string();
        assert!(text.starts_with("--- QUBO Optimization Results ---"));
        assert!(text.contains("Lowest Energy: -1234.50"));
        assert!(text.contains("Selected Items: [1, 4]"));
        assert!(text.contains("Total Value: 1200"));
        assert!(text.contains("Total Weight: 80 (Max: 100)"));
        assert!(!text.contains("FAIL"));
    }

    #[test]
    fn test_display_violations() {
        let mut r = report();
        r.taboo_ok = false;
        r.taboo_violations = vec![ForbiddenPair::new(4, 1).unwrap()];
        let text = r.to_string();
        assert!(text.contains("No taboo pairs:       FAIL"));
        assert!(text.contains("Taboo violations: [(1, 4)]"));
        assert!(!r.is_feasible());
    }

    #[test]
    fn test_overweight() {
        let mut r = report();
        assert_eq!(r.overweight(), 0);
        r.total_weight = 130;
        assert_eq!(r.overweight(), 30);
    }
}
