// Online aggregation: O(1) count/mean state per key, folded record by record.

use std::collections::HashMap;

use super::{BucketKey, bucket};
use crate::models::RequestRecord;

/// Running count and mean of every value folded in so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningMean {
    count: u64,
    mean: f64,
}

impl RunningMean {
    /// State after the first contribution.
    pub fn new(value: f64) -> Self {
        Self {
            count: 1,
            mean: value,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Fold one more value: delta form of `(mean * count + value) / (count + 1)`.
    /// Finite for finite input; the running sum is never formed.
    pub fn push(self, value: f64) -> Self {
        let count = self.count + 1;
        let delta = value - self.mean;
        Self {
            count,
            mean: self.mean + delta / count as f64,
        }
    }

    /// Combine two partial states into what sequential folding of both inputs gives.
    pub fn merge(self, other: Self) -> Self {
        let count = self.count + other.count;
        if count == 0 {
            return self;
        }
        let weight = other.count as f64 / count as f64;
        Self {
            count,
            mean: self.mean + (other.mean - self.mean) * weight,
        }
    }
}

/// Absent state starts a new mean; present state is advanced by one value.
pub fn update(state: Option<RunningMean>, value: f64) -> RunningMean {
    match state {
        Some(s) => s.push(value),
        None => RunningMean::new(value),
    }
}

/// Fold a record sequence into one state. `None` when the sequence is empty.
pub fn fold_mean<'a>(
    records: impl IntoIterator<Item = &'a RequestRecord>,
) -> Option<RunningMean> {
    records
        .into_iter()
        .fold(None, |state, r| Some(update(state, r.speed)))
}

/// Reducer: count `record` into its bucket.
pub fn fold_bucket_count(
    mut acc: HashMap<BucketKey, u64>,
    record: &RequestRecord,
) -> HashMap<BucketKey, u64> {
    *acc.entry(bucket(record.time)).or_insert(0) += 1;
    acc
}

/// Reducer: fold `record.speed` into its bucket's running mean.
pub fn fold_bucket_mean(
    mut acc: HashMap<BucketKey, RunningMean>,
    record: &RequestRecord,
) -> HashMap<BucketKey, RunningMean> {
    let key = bucket(record.time);
    let next = update(acc.get(&key).copied(), record.speed);
    acc.insert(key, next);
    acc
}

/// Merge two per-bucket mean maps built from disjoint record sets.
pub fn merge_bucket_means(
    mut into: HashMap<BucketKey, RunningMean>,
    from: HashMap<BucketKey, RunningMean>,
) -> HashMap<BucketKey, RunningMean> {
    for (key, state) in from {
        into.entry(key)
            .and_modify(|s| *s = s.merge(state))
            .or_insert(state);
    }
    into
}
