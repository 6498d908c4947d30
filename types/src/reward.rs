//! Catalog item types.

use serde::Deserialize;
use serde::Serialize;

/// Identifies a reward in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RewardId(pub u32);

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The catalog categories a reward can belong to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RewardCategory {
    Food,
    Services,
    Clothing,
    Transportation,
}

impl RewardCategory {
    /// The glyph shown in the card's icon slot. Icon rendering proper is
    /// delegated to the host page; this is only the fallback text.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "☕",
            Self::Services => "✂",
            Self::Clothing => "👕",
            Self::Transportation => "🚌",
        }
    }
}

/// A redeemable catalog item. Immutable at runtime; sourced from the
/// static fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub name: String,
    pub description: String,
    /// Always positive.
    pub points_cost: u32,
    pub category: RewardCategory,
    /// Asset path reference, resolved by the host page.
    pub image: String,
}
