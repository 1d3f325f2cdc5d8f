// Time-bucketed aggregation: bucketing, online count/mean state, sorted series output.
// Accumulator state never leaves the assembler that built it; only finished series do.

mod running;
mod series;

pub use running::{
    RunningMean, fold_bucket_count, fold_bucket_mean, fold_mean, merge_bucket_means, update,
};
pub use series::build_series;

/// Epoch milliseconds of a bucket's lower bound.
pub type BucketKey = i64;

/// Bucket width in milliseconds (one second).
pub const BUCKET_WIDTH_MS: i64 = 1000;

/// Floors `time_ms` to the start of its one-second bucket.
pub fn bucket(time_ms: i64) -> BucketKey {
    time_ms.div_euclid(BUCKET_WIDTH_MS) * BUCKET_WIDTH_MS
}
