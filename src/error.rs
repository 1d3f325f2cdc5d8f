// Error taxonomy for snapshot loading. Aggregation itself is total over a
// validated snapshot and never fails.

use thiserror::Error;

/// A snapshot that cannot be aggregated. Surfaced to the caller as a whole-call failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("snapshot has no \"Query\" category")]
    MissingQuery,

    #[error("empty name in category {category:?}")]
    EmptyName { category: String },

    #[error("{category}:{key}[{index}] has negative time {time}")]
    NegativeTime {
        category: String,
        key: String,
        index: usize,
        time: i64,
    },

    #[error("{category}:{key}[{index}] has invalid speed {speed}")]
    InvalidSpeed {
        category: String,
        key: String,
        index: usize,
        speed: f64,
    },
}
