//! Funding-amount parsing and bucketing.
//!
//! Amount fields are free text ("Up to $50,000", "$5K–$25K", "varies").
//! Parsing extracts every decimal figure, strips thousands separators, and
//! applies `K`/`M` suffixes. The bucket is computed from the LAST figure
//! mentioned; source text usually lists a range and the terminal figure is
//! treated as the representative amount. The min/max pair over all figures
//! feeds the detailed-range filter.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d[\d,\.]*)\s*([KkMm])?").unwrap())
}

/// Every dollar figure in the text, in order of appearance.
pub fn parse_amounts(text: &str) -> Vec<f64> {
    let mut amounts = Vec::new();
    for caps in amount_re().captures_iter(text) {
        let num = caps[1].replace(',', "");
        let Ok(mut val) = num.parse::<f64>() else {
            continue;
        };
        match caps.get(2).map(|m| m.as_str()) {
            Some("K") | Some("k") => val *= 1_000.0,
            Some("M") | Some("m") => val *= 1_000_000.0,
            _ => {}
        }
        amounts.push(val);
    }
    amounts
}

/// Parsed `[min, max]` dollar range of a record. Both ends are `None` when
/// the text carries no parseable figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AmountRange {
    pub fn is_unknown(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Inclusive overlap against a selected `[lo, hi]` range. Rows without
    /// parsed amounts never overlap.
    pub fn overlaps(&self, lo: f64, hi: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => hi >= min && lo <= max,
            _ => false,
        }
    }
}

/// Min and max over every figure in the text.
pub fn amount_min_max(text: &str) -> AmountRange {
    let vals = parse_amounts(text);
    if vals.is_empty() {
        return AmountRange::default();
    }
    let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    AmountRange {
        min: Some(min),
        max: Some(max),
    }
}

/// Discrete funding-amount band. Ordered, non-overlapping, inclusive lower
/// bounds: exactly 5000 lands in `5K–25K`, not `Under 5K`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FundingBucket {
    #[serde(rename = "Under 5K")]
    Under5K,
    #[serde(rename = "5K–25K")]
    From5KTo25K,
    #[serde(rename = "25K–100K")]
    From25KTo100K,
    #[serde(rename = "100K–500K")]
    From100KTo500K,
    #[serde(rename = "500K+")]
    Over500K,
    #[serde(rename = "Unknown / Not stated")]
    Unknown,
}

impl FundingBucket {
    pub const ALL: [FundingBucket; 6] = [
        FundingBucket::Under5K,
        FundingBucket::From5KTo25K,
        FundingBucket::From25KTo100K,
        FundingBucket::From100KTo500K,
        FundingBucket::Over500K,
        FundingBucket::Unknown,
    ];

    pub fn from_amount(val: f64) -> Self {
        if val < 5_000.0 {
            FundingBucket::Under5K
        } else if val < 25_000.0 {
            FundingBucket::From5KTo25K
        } else if val < 100_000.0 {
            FundingBucket::From25KTo100K
        } else if val < 500_000.0 {
            FundingBucket::From100KTo500K
        } else {
            FundingBucket::Over500K
        }
    }

    /// Bucket a free-text amount field on its last parsed figure.
    pub fn from_text(text: &str) -> Self {
        match parse_amounts(text).last() {
            Some(&val) => FundingBucket::from_amount(val),
            None => FundingBucket::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FundingBucket::Under5K => "Under 5K",
            FundingBucket::From5KTo25K => "5K–25K",
            FundingBucket::From25KTo100K => "25K–100K",
            FundingBucket::From100KTo500K => "100K–500K",
            FundingBucket::Over500K => "500K+",
            FundingBucket::Unknown => "Unknown / Not stated",
        }
    }
}

impl std::fmt::Display for FundingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The fine-grained checkbox ranges offered alongside buckets. Hosts feed
/// the selected `(lo, hi)` pairs into `FilterState::detailed_ranges`.
pub fn detailed_bands() -> &'static [(&'static str, (f64, f64))] {
    &[
        ("< $5K", (0.0, 5_000.0)),
        ("$5K–$10K", (5_000.0, 10_000.0)),
        ("$10K–$25K", (10_000.0, 25_000.0)),
        ("$25K–$50K", (25_000.0, 50_000.0)),
        ("$50K–$100K", (50_000.0, 100_000.0)),
        ("$100K–$250K", (100_000.0, 250_000.0)),
        ("$250K–$500K", (250_000.0, 500_000.0)),
        (">$500K", (500_000.0, f64::INFINITY)),
    ]
}
