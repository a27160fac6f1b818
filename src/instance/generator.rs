//! Seeded instance generator.

use super::config::InstanceConfig;
use super::types::{ForbiddenPair, Instance, Item};
use crate::error::Result;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Independent random streams, one per generated attribute.
///
/// Changing e.g. the number of taboo pairs leaves values, weights, and
/// categories untouched for the same seed.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Values = 0,
    Weights = 1,
    Categories = 2,
    TabooPairs = 3,
}

fn stream_rng(seed: u64, stream: Stream) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream as u64);
    rng
}

/// Generates reproducible random instances.
pub struct InstanceGenerator;

impl InstanceGenerator {
    /// Generates an instance from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_qubo::instance::{InstanceConfig, InstanceGenerator};
    ///
    /// let config = InstanceConfig::default().with_num_items(10).with_seed(1);
    /// let a = InstanceGenerator::generate(&config).unwrap();
    /// let b = InstanceGenerator::generate(&config).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 10);
    /// ```
    pub fn generate(config: &InstanceConfig) -> Result<Instance> {
        config.validate()?;
        let n = config.num_items;

        let mut rng = stream_rng(config.seed, Stream::Values);
        let values: Vec<i64> = (0..n)
            .map(|_| rng.random_range(config.min_value..=config.max_value))
            .collect();

        let mut rng = stream_rng(config.seed, Stream::Weights);
        let weights: Vec<i64> = (0..n)
            .map(|_| rng.random_range(config.min_weight..=config.max_weight))
            .collect();

        let mut rng = stream_rng(config.seed, Stream::Categories);
        let categories: Vec<u32> = (0..n)
            .map(|_| rng.random_range(0..config.num_categories))
            .collect();

        let mut rng = stream_rng(config.seed, Stream::TabooPairs);
        let pairs: Vec<ForbiddenPair> = (0..config.num_taboo_pairs)
            .filter_map(|_| {
                let drawn = index::sample(&mut rng, n, 2).into_vec();
                ForbiddenPair::new(drawn[0], drawn[1])
            })
            .collect();

        let items = values
            .into_iter()
            .zip(weights)
            .zip(categories)
            .map(|((value, weight), category)| Item::new(value, weight, category))
            .collect();

        let instance = Instance::new(items, pairs)?;
        debug!(
            items = instance.len(),
            forbidden_pairs = instance.forbidden_pairs().len(),
            seed = config.seed,
            "generated instance"
        );
        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        let config = InstanceConfig::default().with_seed(123);
        let a = InstanceGenerator::generate(&config).unwrap();
        let b = InstanceGenerator::generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = InstanceGenerator::generate(&InstanceConfig::default().with_seed(1)).unwrap();
        let b = InstanceGenerator::generate(&InstanceConfig::default().with_seed(2)).unwrap();
        assert_ne!(a.items(), b.items());
    }

    #[test]
    fn test_ranges_respected() {
        let config = InstanceConfig::default();
        let inst = InstanceGenerator::generate(&config).unwrap();
        assert_eq!(inst.len(), 100);
        for item in inst.items() {
            assert!((100..=1000).contains(&item.value));
            assert!((10..=100).contains(&item.weight));
            assert!(item.category < 10);
        }
    }

    #[test]
    fn test_taboo_pairs_distinct_and_bounded() {
        let config = InstanceConfig::default().with_num_taboo_pairs(40);
        let inst = InstanceGenerator::generate(&config).unwrap();
        let pairs = inst.forbidden_pairs();
        assert!(!pairs.is_empty());
        assert!(pairs.len() <= 40);
        for w in pairs.windows(2) {
            assert!(w[0] < w[1], "pairs must be sorted and unique");
        }
        for p in pairs {
            assert!(p.low() < p.high());
            assert!(p.high() < inst.len());
        }
    }

    #[test]
    fn test_taboo_count_does_not_shift_items() {
        let base = InstanceConfig::default().with_seed(9);
        let a = InstanceGenerator::generate(&base.clone().with_num_taboo_pairs(0)).unwrap();
        let b = InstanceGenerator::generate(&base.with_num_taboo_pairs(30)).unwrap();
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = InstanceConfig::default().with_num_categories(0);
        assert!(InstanceGenerator::generate(&config).is_err());
    }
}
