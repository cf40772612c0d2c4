use std::sync::OnceLock;

use regex::Regex;

fn url_like() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)https?://|www\.|\.ca\b|\.com\b|\.org\b|\.net\b").unwrap()
    })
}

fn numericy() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,4}$").unwrap())
}

/// Split a raw delimited tag field into cleaned, lowercased tokens.
///
/// Splits on `;`, `,`, `/`, and `|`; drops empty tokens, URL-like tokens,
/// and purely numeric tokens of 1 to 4 digits (stray figures leak into tag
/// columns). Left-to-right order is preserved and duplicates are kept;
/// dedup happens later when facet sets are built.
pub fn tokenize(raw_field: &str) -> Vec<String> {
    raw_field
        .split(|c| matches!(c, ';' | ',' | '/' | '|'))
        .map(|part| part.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| !url_like().is_match(t))
        .filter(|t| !numericy().is_match(t))
        .collect()
}
