//! Faceted search and filter engine for small-business support program
//! catalogues.
//!
//! `pathfinder-core` takes a table of pre-mapped spreadsheet rows, derives
//! canonical facet labels, funding buckets, freshness, and identity keys once
//! at load time, and then answers fuzzy full-text searches and faceted filter
//! queries as pure functions of `(catalog, state)`. All derived sets and
//! count maps iterate deterministically; identical inputs always produce
//! identical outputs.
//!
//! Spreadsheet ingestion, UI rendering, and session persistence live outside
//! this crate; the boundary is a `Vec<RawProgram>` in and filtered record
//! slices plus per-facet option counts out.

pub mod catalog;
pub mod derived;
pub mod engine;
pub mod normalize;
pub mod search;
pub mod types;
