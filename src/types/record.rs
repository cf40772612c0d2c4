use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::derived::amounts::{amount_min_max, AmountRange, FundingBucket};
use crate::derived::freshness::{days_since, freshness_label};
use crate::derived::identity::identity_key;
use crate::derived::status::StatusClass;
use crate::normalize::keywords::{
    activity_table, audience_table, funding_type_table, stage_table,
};
use crate::normalize::tokenizer::tokenize;

/// One pre-mapped spreadsheet row.
///
/// Column-name mapping happens upstream of this crate; a missing column
/// arrives here as an empty string, never as a null. Spreadsheet exports
/// routinely carry numbers or nulls in nominally-text columns, so every
/// field deserializes lossily: numbers and booleans become their string
/// form, nulls and anything structured become empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProgram {
    #[serde(deserialize_with = "lossy_string")]
    pub program_name: String,
    #[serde(deserialize_with = "lossy_string")]
    pub organization_name: String,
    #[serde(deserialize_with = "lossy_string")]
    pub description: String,
    #[serde(deserialize_with = "lossy_string")]
    pub eligibility_text: String,
    #[serde(deserialize_with = "lossy_string")]
    pub website: String,
    #[serde(deserialize_with = "lossy_string")]
    pub email: String,
    #[serde(deserialize_with = "lossy_string")]
    pub phone: String,
    #[serde(deserialize_with = "lossy_string")]
    pub region_text: String,
    #[serde(deserialize_with = "lossy_string")]
    pub status_text: String,
    #[serde(deserialize_with = "lossy_string")]
    pub funding_amount_text: String,
    #[serde(deserialize_with = "lossy_string")]
    pub tags_text: String,
    #[serde(deserialize_with = "lossy_string")]
    pub last_checked_text: String,
}

fn lossy_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Knobs for load-time derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeriveConfig {
    /// Also scan the program name and description for funding-type keywords,
    /// not only the tag field.
    pub funding_type_scans_text_fields: bool,
    /// Reference date for freshness. Defaults to the current UTC date;
    /// tests pin it for determinism.
    pub today: NaiveDate,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            funding_type_scans_text_fields: false,
            today: Utc::now().date_naive(),
        }
    }
}

/// A catalogue row with every derived attribute computed.
///
/// Built once at load time and never mutated afterwards. Facet sets are
/// `BTreeSet`s so iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub raw: RawProgram,

    /// Stable across reloads: normalized name + organization. Collisions for
    /// distinct rows with identical (name, org) are accepted, not deduplicated.
    pub identity_key: String,

    pub funding_bucket: FundingBucket,
    pub amount_range: AmountRange,

    pub last_checked: Option<NaiveDate>,
    pub freshness_days: Option<i64>,
    pub freshness_label: String,

    pub status_class: StatusClass,

    pub activity_set: BTreeSet<String>,
    pub stage_set: BTreeSet<String>,
    pub audience_set: BTreeSet<String>,
    pub fund_type_set: BTreeSet<String>,
}

impl ProgramRecord {
    /// Derive every computed attribute for a raw row.
    ///
    /// This is the only way to construct a record; it keeps the whole
    /// derivation pipeline in one place and is a pure function of
    /// `(raw, config)`.
    pub fn derive(raw: RawProgram, config: &DeriveConfig) -> Self {
        let tokens = tokenize(&raw.tags_text);

        let activity_set = normalize_tokens(&tokens, activity_table());
        let stage_set = normalize_tokens(&tokens, stage_table());
        let audience_set = normalize_tokens(&tokens, audience_table());

        // Funding type is multi-hit: every matching needle contributes its
        // canonical label ("tax credit" yields both Tax Credit and Credit).
        let mut fund_type_set: BTreeSet<String> = tokens
            .iter()
            .flat_map(|t| funding_type_table().match_all(t))
            .map(str::to_string)
            .collect();
        if config.funding_type_scans_text_fields {
            for field in [&raw.program_name, &raw.description] {
                fund_type_set.extend(
                    funding_type_table()
                        .match_all(&field.to_lowercase())
                        .into_iter()
                        .map(str::to_string),
                );
            }
        }

        let identity_key = identity_key(&raw.program_name, &raw.organization_name);
        let funding_bucket = FundingBucket::from_text(&raw.funding_amount_text);
        let amount_range = amount_min_max(&raw.funding_amount_text);

        let (last_checked, freshness_days) = days_since(&raw.last_checked_text, config.today);
        let freshness_label = freshness_label(freshness_days);

        let status_class = StatusClass::classify(&raw.status_text);

        Self {
            raw,
            identity_key,
            funding_bucket,
            amount_range,
            last_checked,
            freshness_days,
            freshness_label,
            status_class,
            activity_set,
            stage_set,
            audience_set,
            fund_type_set,
        }
    }
}

fn normalize_tokens(
    tokens: &[String],
    table: &crate::normalize::keywords::KeywordTable,
) -> BTreeSet<String> {
    tokens
        .iter()
        .filter_map(|t| table.normalize(t))
        .map(str::to_string)
        .collect()
}
