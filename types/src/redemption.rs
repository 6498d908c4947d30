//! History entries produced by the redemption flow.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// Status of a past redemption. Only `Completed` exists in this scope;
/// the enum keeps the serialized form (`"completed"`) stable for when
/// pending/failed states arrive with a real backend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RedemptionStatus {
    Completed,
}

/// One line of the redemption history. The reward name is a denormalized
/// copy, not a reference into the catalog, so history survives catalog
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionEntry {
    pub id: u64,
    pub reward_name: String,
    /// Serializes as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub points_cost: u32,
    pub status: RedemptionStatus,
}
