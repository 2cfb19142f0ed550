//! Frequency distributions
//!
//! The counting substrate for training: word types, type pairs and sentence
//! starters are all tallied in a [`FrequencyDistribution`].

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts over samples.
///
/// Absent samples read as zero. The total is kept alongside the map so
/// [`total`](Self::total) does not have to walk every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyDistribution<K: Eq + Hash = String> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash> Default for FrequencyDistribution<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> FrequencyDistribution<K> {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `sample`
    pub fn increment(&mut self, sample: K) {
        self.add(sample, 1);
    }

    /// Count `n` more occurrences of `sample`
    pub fn add(&mut self, sample: K, n: usize) {
        if n == 0 {
            return;
        }
        *self.counts.entry(sample).or_insert(0) += n;
        self.total += n;
    }

    /// Number of times `sample` was counted
    pub fn count<Q>(&self, sample: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(sample).copied().unwrap_or(0)
    }

    /// Sum of all counts (N)
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct samples (B)
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Relative frequency of `sample`, 0 for an empty distribution
    pub fn freq<Q>(&self, sample: &Q) -> f64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sample) as f64 / self.total as f64
    }

    /// Samples seen exactly once
    pub fn hapaxes(&self) -> Vec<&K> {
        self.counts
            .iter()
            .filter(|(_, count)| **count == 1)
            .map(|(sample, _)| sample)
            .collect()
    }

    /// Whether nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(sample, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(sample, count)| (sample, *count))
    }

    /// Drop every count
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

impl<K: Eq + Hash + Ord> FrequencyDistribution<K> {
    /// Most frequent sample; ties resolve to the smallest sample
    pub fn max(&self) -> Option<&K> {
        self.counts
            .iter()
            .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| b.cmp(a)))
            .map(|(sample, _)| sample)
    }
}

impl<K: Eq + Hash> Extend<K> for FrequencyDistribution<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for sample in iter {
            self.increment(sample);
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyDistribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Self::new();
        dist.extend(iter);
        dist
    }
}
