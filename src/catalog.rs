//! The immutable, fully-derived row table the engine filters against.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::types::{DeriveConfig, ProgramRecord, RawProgram};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Row deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// All records of one data refresh with derived attributes computed once.
/// Loading is idempotent and side-effect free; filtering never mutates the
/// catalog, so it can be shared and re-queried freely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    records: Vec<ProgramRecord>,
}

impl Catalog {
    pub fn from_rows(rows: Vec<RawProgram>) -> Self {
        Self::from_rows_with(rows, &DeriveConfig::default())
    }

    pub fn from_rows_with(rows: Vec<RawProgram>, config: &DeriveConfig) -> Self {
        Self {
            records: rows
                .into_iter()
                .map(|raw| ProgramRecord::derive(raw, config))
                .collect(),
        }
    }

    /// Load pre-mapped rows from a JSON array. The one fallible seam of the
    /// crate; unknown fields are ignored and missing ones default to empty.
    pub fn from_json_rows(json: &str) -> Result<Self, CatalogError> {
        let rows: Vec<RawProgram> = serde_json::from_str(json)?;
        Ok(Self::from_rows(rows))
    }

    pub fn records(&self) -> &[ProgramRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct activity labels present anywhere in the catalogue.
    /// The candidate option list for the activity facet.
    pub fn activity_options(&self) -> Vec<String> {
        self.collect_options(|r| &r.activity_set)
    }

    pub fn stage_options(&self) -> Vec<String> {
        self.collect_options(|r| &r.stage_set)
    }

    pub fn audience_options(&self) -> Vec<String> {
        self.collect_options(|r| &r.audience_set)
    }

    fn collect_options<F>(&self, select: F) -> Vec<String>
    where
        F: Fn(&ProgramRecord) -> &BTreeSet<String>,
    {
        let mut set = BTreeSet::new();
        for record in &self.records {
            set.extend(select(record).iter().cloned());
        }
        set.into_iter().collect()
    }
}
