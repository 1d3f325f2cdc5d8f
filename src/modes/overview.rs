// Overview mode: request rate, latency and resolver latency series over one snapshot.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::aggregation::{
    RunningMean, build_series, fold_bucket_count, fold_bucket_mean, merge_bucket_means, update,
};
use crate::models::{
    OverviewReport, RequestsSeries, ResolverSpeedSeries, ResponseSeries, Snapshot, Summary,
};

/// Total number of `Query` records across entrypoints. Custom types are not counted.
pub fn get_summary(snapshot: &Snapshot) -> Summary {
    Summary {
        num_total_requests: snapshot.query.values().map(|r| r.len() as u64).sum(),
    }
}

/// Per-second request counts over every `Query` record.
pub fn get_requests(snapshot: &Snapshot) -> RequestsSeries {
    let counts = snapshot
        .query_records()
        .fold(HashMap::new(), fold_bucket_count);
    let (times, rpm) = build_series(counts);
    RequestsSeries { times, rpm }
}

/// Per-second mean latency plus overall mean and count, over every `Query` record.
pub fn get_responses(snapshot: &Snapshot) -> ResponseSeries {
    let (buckets, overall) = snapshot.query_records().fold(
        (HashMap::new(), None::<RunningMean>),
        |(buckets, overall), record| {
            (
                fold_bucket_mean(buckets, record),
                Some(update(overall, record.speed)),
            )
        },
    );
    let (times, bucket_means) = build_series(buckets.into_iter().map(|(t, s)| (t, s.mean())));
    ResponseSeries {
        ave: overall.map_or(0.0, |s| s.mean()),
        count: overall.map_or(0, |s| s.count()),
        times,
        bucket_means,
    }
}

/// Per-second mean latency across every category, `Query` entrypoints included.
/// Each category is folded separately and the partial maps merged.
pub fn get_resolvers(snapshot: &Snapshot) -> ResolverSpeedSeries {
    let buckets = snapshot
        .categories()
        .map(|(_, group)| group.values().flatten().fold(HashMap::new(), fold_bucket_mean))
        .fold(HashMap::new(), merge_bucket_means);
    let (times, ave_speed) = build_series(buckets.into_iter().map(|(t, s)| (t, s.mean())));
    ResolverSpeedSeries { times, ave_speed }
}

#[instrument(skip(snapshot), fields(entrypoints = snapshot.query.len(), types = snapshot.types.len()))]
pub fn get_overview_data(snapshot: &Snapshot) -> OverviewReport {
    let report = OverviewReport {
        summary: get_summary(snapshot),
        requests: get_requests(snapshot),
        response: get_responses(snapshot),
        resolvers: get_resolvers(snapshot),
    };
    debug!(
        total_requests = report.summary.num_total_requests,
        buckets = report.requests.times.len(),
        "overview assembled"
    );
    report
}
