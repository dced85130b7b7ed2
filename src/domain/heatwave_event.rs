use serde::{Deserialize, Serialize};

/// A recorded heatwave, as stored in the `heatwave_event` table.
///
/// `date` is a calendar date string of at most 10 characters, conventionally
/// `YYYY-MM-DD`. Neither field is validated beyond its column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HeatwaveEvent {
    pub id: i64,
    pub date: String,
    pub location: String,
}
