// Dashboard modes. Each assembler reads the snapshot and returns a finished report.

pub mod overview;
pub mod resolvers;

use std::sync::Arc;

use crate::models::{ProcessedData, Snapshot};

/// Both modes, one after the other.
pub fn process(snapshot: &Snapshot) -> ProcessedData {
    ProcessedData {
        overview: overview::get_overview_data(snapshot),
        resolvers: resolvers::get_resolvers_data(snapshot),
    }
}

/// Both modes on separate blocking threads. The snapshot is shared read-only.
pub async fn process_parallel(snapshot: Arc<Snapshot>) -> anyhow::Result<ProcessedData> {
    let for_overview = snapshot.clone();
    let overview =
        tokio::task::spawn_blocking(move || overview::get_overview_data(&for_overview));
    let resolvers = tokio::task::spawn_blocking(move || resolvers::get_resolvers_data(&snapshot));
    let (overview, resolvers) = tokio::try_join!(overview, resolvers)
        .map_err(|e| anyhow::anyhow!("aggregation task: {}", e))?;
    Ok(ProcessedData {
        overview,
        resolvers,
    })
}
