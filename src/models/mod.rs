// Domain models: telemetry input and report output

mod report;
mod snapshot;

pub use report::{
    OverviewReport, ProcessedData, RequestsSeries, ResolverSpeedSeries, ResolversReport,
    ResponseSeries, Summary,
};
pub use snapshot::{Group, QUERY_CATEGORY, RawSnapshot, RequestRecord, Snapshot};
