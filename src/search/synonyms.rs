//! Optional query-term expansion for the fuzzy matcher.

/// Maps a query term to extra terms that should also be tried against the
/// search blob. Expansion is term-wise: each synonym produces one query
/// variant with that term substituted.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: Vec<(String, Vec<String>)>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<'a>(
        &mut self,
        term: &str,
        synonyms: impl IntoIterator<Item = &'a str>,
    ) -> &mut Self {
        self.entries.push((
            term.to_lowercase(),
            synonyms.into_iter().map(|s| s.to_lowercase()).collect(),
        ));
        self
    }

    /// A starter table covering the advice/mentorship vocabulary the
    /// catalogue search tip advertises.
    pub fn common() -> Self {
        let mut table = Self::new();
        table.insert("mentor", ["mentorship", "mentoring"]);
        table.insert("advice", ["advisory", "advising", "coaching"]);
        table.insert("funding", ["grant", "loan", "financing"]);
        table.insert("training", ["workshop", "course"]);
        table
    }

    /// Query variants beyond the original: for each whitespace- or
    /// comma-separated term with synonyms, one variant per synonym with the
    /// term replaced. The original query itself is not included.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let terms: Vec<&str> = query
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let mut variants = Vec::new();
        for (i, term) in terms.iter().enumerate() {
            let t = term.to_lowercase();
            for (key, synonyms) in &self.entries {
                if &t != key {
                    continue;
                }
                for synonym in synonyms {
                    let mut replaced: Vec<&str> = terms.clone();
                    replaced[i] = synonym.as_str();
                    let variant = replaced.join(" ");
                    if !variants.contains(&variant) {
                        variants.push(variant);
                    }
                }
            }
        }
        variants
    }
}
