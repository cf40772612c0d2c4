//! Fuzzy full-text matching over record fields.
//!
//! The match decision is a partial-ratio similarity of the lowercased query
//! against a space-joined blob of the searchable fields, thresholded at 70.
//! Partial ratio takes the best-aligned substring window rather than
//! requiring whole-string alignment, so "mentor" scores 100 against a blob
//! containing "mentorship".

use crate::search::synonyms::SynonymTable;
use crate::types::ProgramRecord;

/// Canonical match threshold. Some hosts expose it; this is the default and
/// the recommended constant.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Similarity between a query and a text blob, normalized to `[0, 100]`.
pub trait Similarity {
    fn score(&self, query: &str, blob: &str) -> f64;
}

/// Levenshtein-based partial-ratio similarity.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialRatio;

impl Similarity for PartialRatio {
    fn score(&self, query: &str, blob: &str) -> f64 {
        partial_ratio(query, blob)
    }
}

/// Best normalized Levenshtein similarity of the shorter string against
/// every equal-length character window of the longer one, in `[0, 100]`.
/// An exact substring short-circuits at 100.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return if a == b { 100.0 } else { 0.0 };
    }
    if b.contains(a) || a.contains(b) {
        return 100.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let window = short.len();
    let short_str: String = short.iter().collect();
    let mut best = 0.0_f64;
    for start in 0..=(long.len() - window) {
        let window_str: String = long[start..start + window].iter().collect();
        let distance = strsim::levenshtein(&short_str, &window_str);
        let sim = 100.0 * (1.0 - distance as f64 / window as f64);
        if sim > best {
            best = sim;
        }
    }
    best
}

/// Boolean fuzzy matcher over a record's searchable fields, generic over the
/// similarity function the same way the engine is.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher<S = PartialRatio> {
    similarity: S,
    threshold: f64,
    synonyms: Option<SynonymTable>,
}

impl Default for FuzzyMatcher<PartialRatio> {
    fn default() -> Self {
        Self::new(PartialRatio, DEFAULT_THRESHOLD)
    }
}

impl<S: Similarity> FuzzyMatcher<S> {
    pub fn new(similarity: S, threshold: f64) -> Self {
        Self {
            similarity,
            threshold,
            synonyms: None,
        }
    }

    /// Enable synonym expansion: a record matches when any expanded query
    /// variant clears the threshold.
    pub fn with_synonyms(mut self, table: SynonymTable) -> Self {
        self.synonyms = Some(table);
        self
    }

    /// An empty or whitespace-only query matches everything.
    pub fn matches(&self, record: &ProgramRecord, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let blob = search_blob(record);
        if self.similarity.score(&q, &blob) >= self.threshold {
            return true;
        }
        if let Some(table) = &self.synonyms {
            return table
                .expand(&q)
                .iter()
                .any(|variant| self.similarity.score(variant, &blob) >= self.threshold);
        }
        false
    }
}

/// The searchable fields, space-joined and lowercased: program name,
/// organization, description, eligibility, and raw tags.
pub fn search_blob(record: &ProgramRecord) -> String {
    [
        record.raw.program_name.as_str(),
        record.raw.organization_name.as_str(),
        record.raw.description.as_str(),
        record.raw.eligibility_text.as_str(),
        record.raw.tags_text.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}
