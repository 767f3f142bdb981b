//! Analysis Report
//!
//! Serializable summary of one document.

use serde::Serialize;

use crate::estimate::Simulation;
use crate::metadata::Metadata;

/// Where the estimated print time came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSource {
    Metadata,
    Simulation,
}

impl std::fmt::Display for TimeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metadata => f.write_str("metadata"),
            Self::Simulation => f.write_str("simulation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub metadata: Metadata,
    pub layer_count: usize,
    /// Print time in whole seconds
    pub estimated_seconds: u64,
    pub time_source: TimeSource,
    /// Present only when the time was simulated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<Simulation>,
}
