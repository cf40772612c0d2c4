//! The faceted filter engine.
//!
//! Two operations, both pure functions of `(catalog, state)`:
//!
//! - `filtered`: the intersection of the fuzzy query mask and every active
//!   facet selection.
//! - `facet_counts`: for one facet, the per-option row counts after applying
//!   every active filter EXCEPT that facet's own dimension. This lets a UI
//!   show "Grant (12)" where 12 reflects all other constraints, and keeps an
//!   already-checked option from disabling itself to zero.
//!
//! Counts must be recomputed independently per facet (one partial pass
//! each); they cannot be derived from the single fully-filtered set.

pub mod sorting;

pub use sorting::{paginate, sort_records, PageInfo, SortMode};

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::derived::amounts::FundingBucket;
use crate::normalize::keywords::funding_type_table;
use crate::normalize::region;
use crate::search::fuzzy::{FuzzyMatcher, PartialRatio, Similarity};
use crate::types::{Facet, FilterState, ProgramRecord};

/// The engine, generic over the similarity function behind the fuzzy
/// matcher. Holds no per-query state.
#[derive(Debug, Clone)]
pub struct ProgramFilter<S = PartialRatio> {
    matcher: FuzzyMatcher<S>,
}

impl Default for ProgramFilter<PartialRatio> {
    fn default() -> Self {
        Self {
            matcher: FuzzyMatcher::default(),
        }
    }
}

impl<S: Similarity> ProgramFilter<S> {
    pub fn new(matcher: FuzzyMatcher<S>) -> Self {
        Self { matcher }
    }

    /// The fully filtered result set, in catalogue order.
    pub fn filtered<'a>(
        &self,
        catalog: &'a Catalog,
        state: &FilterState,
    ) -> Vec<&'a ProgramRecord> {
        let mask = self.query_mask(catalog, state);
        filtered_except(catalog, state, None, &mask)
    }

    /// Per-option counts for one facet, computed over the row set filtered
    /// by every dimension except `facet` itself. Every candidate option is
    /// present in the map, zero-count options included; they stay selectable.
    pub fn facet_counts(
        &self,
        catalog: &Catalog,
        state: &FilterState,
        facet: Facet,
    ) -> BTreeMap<String, usize> {
        let mask = self.query_mask(catalog, state);
        self.facet_counts_masked(catalog, state, facet, &mask)
    }

    /// Counts for every facet at once. The fuzzy query is scored once per
    /// record here and the resulting mask is shared across all six partial
    /// passes, rather than re-scoring the blob per pass.
    pub fn all_facet_counts(
        &self,
        catalog: &Catalog,
        state: &FilterState,
    ) -> BTreeMap<Facet, BTreeMap<String, usize>> {
        let mask = self.query_mask(catalog, state);
        Facet::ALL
            .iter()
            .map(|&facet| (facet, self.facet_counts_masked(catalog, state, facet, &mask)))
            .collect()
    }

    /// One similarity evaluation per record. The query mask applies to every
    /// pass, counts included.
    fn query_mask(&self, catalog: &Catalog, state: &FilterState) -> Vec<bool> {
        catalog
            .records()
            .iter()
            .map(|record| self.matcher.matches(record, &state.query))
            .collect()
    }

    fn facet_counts_masked(
        &self,
        catalog: &Catalog,
        state: &FilterState,
        facet: Facet,
        mask: &[bool],
    ) -> BTreeMap<String, usize> {
        let partial = filtered_except(catalog, state, Some(facet), mask);
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();

        match facet {
            Facet::Region => {
                for label in region::labels() {
                    let n = partial
                        .iter()
                        .filter(|r| region::matches(&r.raw.region_text, label))
                        .count();
                    counts.insert(label.to_string(), n);
                }
            }
            Facet::FundingType => {
                for label in funding_type_table().labels() {
                    let n = partial
                        .iter()
                        .filter(|r| r.fund_type_set.contains(label))
                        .count();
                    counts.insert(label.to_string(), n);
                }
            }
            Facet::FundingAmount => {
                for bucket in FundingBucket::ALL {
                    let n = partial
                        .iter()
                        .filter(|r| r.funding_bucket == bucket)
                        .count();
                    counts.insert(bucket.label().to_string(), n);
                }
            }
            Facet::Stage => {
                tally_sets(&mut counts, &partial, catalog.stage_options(), |r| {
                    &r.stage_set
                });
            }
            Facet::Activity => {
                tally_sets(&mut counts, &partial, catalog.activity_options(), |r| {
                    &r.activity_set
                });
            }
            Facet::Audience => {
                tally_sets(&mut counts, &partial, catalog.audience_options(), |r| {
                    &r.audience_set
                });
            }
        }
        counts
    }
}

fn filtered_except<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    except: Option<Facet>,
    mask: &[bool],
) -> Vec<&'a ProgramRecord> {
    catalog
        .records()
        .iter()
        .zip(mask)
        .filter(|&(record, &matched)| matched && keeps(record, state, except))
        .map(|(record, _)| record)
        .collect()
}

fn keeps(record: &ProgramRecord, state: &FilterState, except: Option<Facet>) -> bool {
    if except != Some(Facet::Region)
        && !state.regions.is_empty()
        && !state
            .regions
            .iter()
            .any(|label| region::matches(&record.raw.region_text, label))
    {
        return false;
    }

    if except != Some(Facet::FundingAmount) && !amount_passes(record, state) {
        return false;
    }

    if except != Some(Facet::FundingType)
        && !state.funding_types.is_empty()
        && record.fund_type_set.is_disjoint(&state.funding_types)
    {
        return false;
    }

    if except != Some(Facet::Stage)
        && !state.stages.is_empty()
        && record.stage_set.is_disjoint(&state.stages)
    {
        return false;
    }

    if except != Some(Facet::Activity)
        && !state.activities.is_empty()
        && record.activity_set.is_disjoint(&state.activities)
    {
        return false;
    }

    if except != Some(Facet::Audience)
        && !state.audiences.is_empty()
        && record.audience_set.is_disjoint(&state.audiences)
    {
        return false;
    }

    true
}

/// Detailed ranges supersede bucket selections entirely; never both.
fn amount_passes(record: &ProgramRecord, state: &FilterState) -> bool {
    if !state.detailed_ranges.is_empty() {
        return state
            .detailed_ranges
            .iter()
            .any(|&(lo, hi)| record.amount_range.overlaps(lo, hi));
    }
    if !state.funding_buckets.is_empty() && !state.funding_buckets.contains(&record.funding_bucket)
    {
        return false;
    }
    if state.only_numeric && record.amount_range.is_unknown() {
        return false;
    }
    true
}

fn tally_sets<'a, F>(
    counts: &mut BTreeMap<String, usize>,
    partial: &[&'a ProgramRecord],
    options: Vec<String>,
    select: F,
) where
    F: Fn(&'a ProgramRecord) -> &'a std::collections::BTreeSet<String>,
{
    for option in options {
        counts.insert(option, 0);
    }
    for &record in partial {
        for value in select(record) {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
    }
}
