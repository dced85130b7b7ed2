use serde::{Deserialize, Serialize};

/// Degrees Celsius reported for every sea-surface temperature lookup.
pub const PLACEHOLDER_SST: f64 = 25.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SstReading {
    pub date: Option<String>,
    pub sst: f64,
}

impl SstReading {
    /// The fixed reading for `date`. No data source is consulted.
    #[must_use]
    pub const fn placeholder(date: Option<String>) -> Self {
        Self {
            date,
            sst: PLACEHOLDER_SST,
        }
    }
}
