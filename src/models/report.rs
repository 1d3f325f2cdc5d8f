// Report value objects handed to the dashboard. Field names are part of the wire contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Both modes for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedData {
    pub overview: OverviewReport,
    pub resolvers: ResolversReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewReport {
    pub summary: Summary,
    pub requests: RequestsSeries,
    pub response: ResponseSeries,
    pub resolvers: ResolverSpeedSeries,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub num_total_requests: u64,
}

/// Requests per one-second bucket. `rpm` is a per-second count despite the name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestsSeries {
    pub times: Vec<i64>,
    pub rpm: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseSeries {
    /// Mean latency over every `Query` record.
    pub ave: f64,
    pub count: u64,
    pub times: Vec<i64>,
    /// Per-bucket mean latency. The dashboard reads it as key "90"; it is not a percentile.
    #[serde(rename = "90")]
    pub bucket_means: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverSpeedSeries {
    pub times: Vec<i64>,
    pub ave_speed: Vec<f64>,
}

/// Keys are `"<type>:<resolver>"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolversReport {
    pub invocation_counts: BTreeMap<String, u64>,
    pub execution_times: BTreeMap<String, f64>,
    pub average_time: f64,
}
