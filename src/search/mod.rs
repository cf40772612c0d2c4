pub mod fuzzy;
pub mod synonyms;

pub use fuzzy::{partial_ratio, FuzzyMatcher, PartialRatio, Similarity, DEFAULT_THRESHOLD};
pub use synonyms::SynonymTable;
