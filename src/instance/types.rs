//! Item table and forbidden-pair set.

use crate::error::{QuboError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A selectable item. Its identity is its index in the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Reward for selecting the item.
    pub value: i64,
    /// Mass counted against the capacity.
    pub weight: i64,
    /// Category tag; at most one item per category may be selected.
    pub category: u32,
}

impl Item {
    pub fn new(value: i64, weight: i64, category: u32) -> Self {
        Self {
            value,
            weight,
            category,
        }
    }
}

/// Two distinct items that must never be selected together.
///
/// Stored canonically with `low < high`, so `(3, 7)` and `(7, 3)` are the
/// same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct ForbiddenPair {
    low: usize,
    high: usize,
}

/// Wire form of a [`ForbiddenPair`] before canonicalization.
#[derive(Deserialize)]
struct RawPair {
    low: usize,
    high: usize,
}

impl TryFrom<RawPair> for ForbiddenPair {
    type Error = QuboError;

    fn try_from(raw: RawPair) -> Result<Self> {
        ForbiddenPair::new(raw.low, raw.high).ok_or_else(|| {
            QuboError::invalid(format!(
                "forbidden pair ({}, {}) must name two distinct items",
                raw.low, raw.high
            ))
        })
    }
}

impl ForbiddenPair {
    /// Creates a pair, or `None` if both indices are equal.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller index.
    pub fn low(&self) -> usize {
        self.low
    }

    /// The larger index.
    pub fn high(&self) -> usize {
        self.high
    }

    /// Whether both members are selected in `bits`.
    pub fn is_violated_by(&self, bits: &[bool]) -> bool {
        bits[self.low] && bits[self.high]
    }
}

/// An immutable problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    items: Vec<Item>,
    forbidden: Vec<ForbiddenPair>,
}

#[derive(Deserialize)]
struct RawInstance {
    items: Vec<Item>,
    #[serde(default)]
    forbidden: Vec<ForbiddenPair>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = QuboError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Instance::new(raw.items, raw.forbidden)
    }
}

impl Instance {
    /// Creates an instance, de-duplicating and sorting the forbidden pairs.
    ///
    /// Fails if a pair references an index outside the item table.
    pub fn new(
        items: Vec<Item>,
        forbidden: impl IntoIterator<Item = ForbiddenPair>,
    ) -> Result<Self> {
        let len = items.len();
        let mut unique = BTreeSet::new();
        for pair in forbidden {
            if pair.high >= len {
                return Err(QuboError::InvalidPair {
                    first: pair.low,
                    second: pair.high,
                    len,
                });
            }
            unique.insert(pair);
        }
        Ok(Self {
            items,
            forbidden: unique.into_iter().collect(),
        })
    }

    /// Convenience constructor from raw index tuples.
    pub fn from_pairs(items: Vec<Item>, pairs: &[(usize, usize)]) -> Result<Self> {
        let len = items.len();
        let mut forbidden = Vec::with_capacity(pairs.len());
        for &(a, b) in pairs {
            let pair = ForbiddenPair::new(a, b).ok_or(QuboError::InvalidPair {
                first: a,
                second: b,
                len,
            })?;
            forbidden.push(pair);
        }
        Self::new(items, forbidden)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Forbidden pairs in ascending order.
    pub fn forbidden_pairs(&self) -> &[ForbiddenPair] {
        &self.forbidden
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_forbidden(&self, a: usize, b: usize) -> bool {
        ForbiddenPair::new(a, b).is_some_and(|p| self.forbidden.binary_search(&p).is_ok())
    }

    /// Largest item value, or 0 for an empty instance.
    pub fn max_value(&self) -> i64 {
        self.items.iter().map(|it| it.value).max().unwrap_or(0)
    }

    /// Smallest item weight, or 0 for an empty instance.
    pub fn min_weight(&self) -> i64 {
        self.items.iter().map(|it| it.weight).min().unwrap_or(0)
    }

    /// Index pairs `(i, j)`, `i < j`, whose items share a category.
    pub fn same_category_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.items.len() {
            for j in (i + 1)..self.items.len() {
                if self.items[i].category == self.items[j].category {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
