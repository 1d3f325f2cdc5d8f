// Series builder: bucket map -> parallel (times, values) sequences sorted by time.

use super::BucketKey;

/// `times` ascending; `values[i]` belongs to `times[i]`. Keys are unique per bucket.
pub fn build_series<V>(
    buckets: impl IntoIterator<Item = (BucketKey, V)>,
) -> (Vec<BucketKey>, Vec<V>) {
    let mut entries: Vec<(BucketKey, V)> = buckets.into_iter().collect();
    entries.sort_by_key(|(time, _)| *time);
    entries.into_iter().unzip()
}
