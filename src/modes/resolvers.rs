// Resolvers mode: per-resolver invocation counts and mean execution times, custom types only.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::aggregation::fold_mean;
use crate::models::{ResolversReport, Snapshot};

/// `"<type>:<resolver>"`, the key shape downstream consumers match on.
pub fn resolver_key(custom_type: &str, resolver: &str) -> String {
    format!("{}:{}", custom_type, resolver)
}

/// Record count per resolver.
pub fn get_invocation_counts(snapshot: &Snapshot) -> BTreeMap<String, u64> {
    let mut out = BTreeMap::new();
    for (custom_type, group) in &snapshot.types {
        for (resolver, records) in group {
            out.insert(resolver_key(custom_type, resolver), records.len() as u64);
        }
    }
    out
}

/// Mean `speed` per resolver over its whole record sequence; 0.0 for an empty sequence.
pub fn get_execution_times(snapshot: &Snapshot) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();
    for (custom_type, group) in &snapshot.types {
        for (resolver, records) in group {
            let mean = fold_mean(records).map_or(0.0, |s| s.mean());
            out.insert(resolver_key(custom_type, resolver), mean);
        }
    }
    out
}

/// Invocation-weighted mean of the per-resolver execution times. 0.0 with no invocations.
/// Both maps come from the same snapshot and carry identical keys.
pub fn get_average_time(
    invocation_counts: &BTreeMap<String, u64>,
    execution_times: &BTreeMap<String, f64>,
) -> f64 {
    debug_assert!(
        invocation_counts.keys().eq(execution_times.keys()),
        "invocation counts and execution times must share one key space"
    );
    let total: u64 = invocation_counts.values().sum();
    if total == 0 {
        return 0.0;
    }
    // Count shares sum to 1; the result stays within the range of the means.
    invocation_counts
        .values()
        .zip(execution_times.values())
        .map(|(&count, &time)| time * (count as f64 / total as f64))
        .sum()
}

#[instrument(skip(snapshot), fields(types = snapshot.types.len()))]
pub fn get_resolvers_data(snapshot: &Snapshot) -> ResolversReport {
    let invocation_counts = get_invocation_counts(snapshot);
    let execution_times = get_execution_times(snapshot);
    let average_time = get_average_time(&invocation_counts, &execution_times);
    debug!(
        resolvers = invocation_counts.len(),
        average_time, "resolvers assembled"
    );
    ResolversReport {
        invocation_counts,
        execution_times,
        average_time,
    }
}
