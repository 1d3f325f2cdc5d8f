// Telemetry snapshot: the single input to every aggregation run.
// The raw shape is a map of category -> key -> records; "Query" is split out at load time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Category holding top-level entrypoints.
pub const QUERY_CATEGORY: &str = "Query";

/// One timed request: epoch-millisecond `time`, latency `speed` in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub time: i64,
    pub speed: f64,
}

/// Entrypoint or resolver name -> its records, in arrival order.
pub type Group = BTreeMap<String, Vec<RequestRecord>>;

/// Snapshot as it crosses the boundary: category name -> group.
pub type RawSnapshot = BTreeMap<String, Group>;

/// Validated snapshot with the `Query` category separated from custom types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Entrypoint name -> records.
    pub query: Group,
    /// Custom type name -> resolver name -> records.
    pub types: BTreeMap<String, Group>,
}

impl Snapshot {
    /// Decode a JSON document and validate it.
    pub fn from_json(s: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(s)?;
        Self::try_from(raw)
    }

    /// Every category including `Query`, with its name.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Group)> {
        std::iter::once((QUERY_CATEGORY, &self.query))
            .chain(self.types.iter().map(|(name, group)| (name.as_str(), group)))
    }

    /// All records under `Query`, across entrypoints.
    pub fn query_records(&self) -> impl Iterator<Item = &RequestRecord> {
        self.query.values().flatten()
    }
}

impl TryFrom<RawSnapshot> for Snapshot {
    type Error = SnapshotError;

    fn try_from(mut raw: RawSnapshot) -> Result<Self, Self::Error> {
        let query = raw
            .remove(QUERY_CATEGORY)
            .ok_or(SnapshotError::MissingQuery)?;
        validate_group(QUERY_CATEGORY, &query)?;
        for (category, group) in &raw {
            if category.is_empty() {
                return Err(SnapshotError::EmptyName {
                    category: category.clone(),
                });
            }
            validate_group(category, group)?;
        }
        Ok(Self { query, types: raw })
    }
}

fn validate_group(category: &str, group: &Group) -> Result<(), SnapshotError> {
    for (key, records) in group {
        if key.is_empty() {
            return Err(SnapshotError::EmptyName {
                category: category.to_string(),
            });
        }
        for (index, r) in records.iter().enumerate() {
            if r.time < 0 {
                return Err(SnapshotError::NegativeTime {
                    category: category.to_string(),
                    key: key.clone(),
                    index,
                    time: r.time,
                });
            }
            if !r.speed.is_finite() || r.speed < 0.0 {
                return Err(SnapshotError::InvalidSpeed {
                    category: category.to_string(),
                    key: key.clone(),
                    index,
                    speed: r.speed,
                });
            }
        }
    }
    Ok(())
}
