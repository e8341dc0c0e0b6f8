//! Derived tables handed to the chart builder.
//!
//! Each table sums one numeric field over a structured composite key and
//! emits rows in the order keys were first seen.
//!
//! ```text
//!   Dataset ──► GroupedSum<K> ──► rows
//!                 (IndexMap)
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

pub mod east_west;
pub mod platform_genre;
pub mod regional;
pub mod yearly;

pub use east_west::{east_west_comparison, EastWest, EastWestRow, GenreBalance};
pub use platform_genre::{sales_by_platform_genre, PlatformGenreRow};
pub use regional::{sales_by_platform_region, RegionRow};
pub use yearly::{sales_by_year, GroupField, YearKey, YearlyRow, YearlySales};

/// Running sums keyed by `K`, remembering first-seen key order.
#[derive(Debug, Clone)]
pub struct GroupedSum<K> {
    sums: IndexMap<K, f64>,
}

impl<K: Hash + Eq> GroupedSum<K> {
    pub fn new() -> Self {
        Self {
            sums: IndexMap::new(),
        }
    }

    /// Add `amount` to the group `key`, creating it at zero if unseen.
    pub fn add(&mut self, key: K, amount: f64) {
        *self.sums.entry(key).or_insert(0.0) += amount;
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.sums.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.sums.iter().map(|(k, v)| (k, *v))
    }

    /// Group with the largest sum; on an exact tie the first-seen group wins.
    pub fn top(&self) -> Option<(&K, f64)> {
        self.iter().fold(None, |best, (key, sum)| match best {
            Some((_, best_sum)) if sum <= best_sum => best,
            _ => Some((key, sum)),
        })
    }
}

impl<K: Hash + Eq> Default for GroupedSum<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> IntoIterator for GroupedSum<K> {
    type Item = (K, f64);
    type IntoIter = indexmap::map::IntoIter<K, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.sums.into_iter()
    }
}
