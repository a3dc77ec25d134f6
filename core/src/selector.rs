use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use jeopardy_protocol::{CategoryId, CategorySummary};

use crate::*;

pub trait CategorySelector {
    fn select(self, pool: &[CategorySummary]) -> FetchResult<Vec<CategoryId>>;
}

/// Picks `count` distinct categories uniformly at random, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCategorySelector {
    seed: u64,
    count: usize,
}

impl RandomCategorySelector {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }
}

impl CategorySelector for RandomCategorySelector {
    fn select(self, pool: &[CategorySummary]) -> FetchResult<Vec<CategoryId>> {
        use rand::prelude::*;

        let mut seen = BTreeSet::new();
        let mut ids: Vec<CategoryId> = pool
            .iter()
            .map(|summary| summary.id)
            .filter(|&id| seen.insert(id))
            .collect();

        if ids.len() != pool.len() {
            log::warn!(
                "category pool had {} duplicate ids",
                pool.len() - ids.len()
            );
        }

        if ids.len() < self.count {
            return Err(FetchError::NotEnoughCategories {
                requested: self.count,
                available: ids.len(),
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (picked, _) = ids.partial_shuffle(&mut rng, self.count);
        Ok(picked.to_vec())
    }
}
