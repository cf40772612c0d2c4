use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::derived::amounts::FundingBucket;

/// One independently-selectable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Region,
    FundingType,
    FundingAmount,
    Stage,
    Activity,
    Audience,
}

impl Facet {
    pub const ALL: [Facet; 6] = [
        Facet::Region,
        Facet::FundingType,
        Facet::FundingAmount,
        Facet::Stage,
        Facet::Activity,
        Facet::Audience,
    ];
}

/// The externally-owned selection state for one session.
///
/// Passed by reference into the engine's pure functions; the engine keeps no
/// state between calls. An empty selection set means "no restriction on this
/// facet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub query: String,

    pub regions: BTreeSet<String>,
    pub funding_types: BTreeSet<String>,
    pub funding_buckets: BTreeSet<FundingBucket>,
    pub stages: BTreeSet<String>,
    pub activities: BTreeSet<String>,
    pub audiences: BTreeSet<String>,

    /// Detailed dollar ranges `(lo, hi)`, inclusive on both ends. When any
    /// are present they supersede `funding_buckets` entirely.
    pub detailed_ranges: Vec<(f64, f64)>,
    /// Drop rows without a parseable dollar amount (bucket mode only;
    /// detailed ranges already exclude them).
    pub only_numeric: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither the query nor any facet restricts the result set.
    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty()
            && self.regions.is_empty()
            && self.funding_types.is_empty()
            && self.funding_buckets.is_empty()
            && self.stages.is_empty()
            && self.activities.is_empty()
            && self.audiences.is_empty()
            && self.detailed_ranges.is_empty()
            && !self.only_numeric
    }
}
