//! Ordered keyword-containment tables mapping raw tag text to canonical
//! facet labels.
//!
//! Lookup is "first needle whose substring appears in the token wins", so
//! tables are ordered with more specific needles ahead of more general ones
//! wherever ambiguity exists. Many needles may map to one canonical label.
//! A token matching no needle contributes nothing to the facet (there is no
//! "Unknown" member).

use std::sync::OnceLock;

/// An ordered list of `(needle, canonical)` pairs checked in sequence.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(String, String)>,
}

impl KeywordTable {
    pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(needle, canon)| (needle.to_lowercase(), canon.to_string()))
                .collect(),
        }
    }

    /// First-match-wins normalization of one token. Returns `None` when the
    /// token is blank or no needle matches.
    pub fn normalize(&self, token: &str) -> Option<&str> {
        let t = token.trim().to_lowercase();
        if t.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(needle, _)| t.contains(needle.as_str()))
            .map(|(_, canon)| canon.as_str())
    }

    /// Every canonical label whose needle appears in `text`, deduplicated,
    /// in table order. Used for facets where one tag may legitimately carry
    /// several labels (funding type).
    pub fn match_all(&self, text: &str) -> Vec<&str> {
        let t = text.trim().to_lowercase();
        if t.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<&str> = Vec::new();
        for (needle, canon) in &self.entries {
            if t.contains(needle.as_str()) && !hits.contains(&canon.as_str()) {
                hits.push(canon.as_str());
            }
        }
        hits
    }

    /// Distinct canonical labels in first-appearance order. This is the
    /// candidate option list for facets with a fixed vocabulary.
    pub fn labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (_, canon) in &self.entries {
            if !out.contains(&canon.as_str()) {
                out.push(canon.as_str());
            }
        }
        out
    }
}

/// Activity / support-type facet.
pub fn activity_table() -> &'static KeywordTable {
    static TABLE: OnceLock<KeywordTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        KeywordTable::new([
            ("mentor", "Mentorship"),
            ("mentorship", "Mentorship"),
            ("mentoring", "Mentorship"),
            ("advis", "Advisory / Consulting"),
            ("advisory", "Advisory / Consulting"),
            ("advising", "Advisory / Consulting"),
            ("advice", "Advisory / Consulting"),
            ("coaching", "Coaching"),
            ("accelerator", "Accelerator / Incubator"),
            ("acceleration", "Accelerator / Incubator"),
            ("incubator", "Accelerator / Incubator"),
            ("innovation", "Innovation / R&D"),
            ("research", "Innovation / R&D"),
            ("r&d", "Innovation / R&D"),
            ("export", "Export Readiness"),
            ("network", "Networking / Peer Support"),
            ("networking", "Networking / Peer Support"),
            ("peer", "Networking / Peer Support"),
            ("workshop", "Workshops / Training"),
            ("workshops", "Workshops / Training"),
            ("training", "Workshops / Training"),
            ("cohort", "Cohort / Program Participation"),
            ("program", "Cohort / Program Participation"),
        ])
    })
}

/// Business-stage facet.
pub fn stage_table() -> &'static KeywordTable {
    static TABLE: OnceLock<KeywordTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        KeywordTable::new([
            ("startup", "Startup / Early Stage"),
            ("start-up", "Startup / Early Stage"),
            ("early", "Startup / Early Stage"),
            ("pre-revenue", "Startup / Early Stage"),
            ("pre revenue", "Startup / Early Stage"),
            ("ideation", "Startup / Early Stage"),
            ("prototype", "Startup / Early Stage"),
            ("preseed", "Startup / Early Stage"),
            ("pre-seed", "Startup / Early Stage"),
            ("seed", "Startup / Early Stage"),
            ("scaleup", "Growth / Scale"),
            ("scale-up", "Growth / Scale"),
            ("scale", "Growth / Scale"),
            ("growth", "Growth / Scale"),
            ("expand", "Growth / Scale"),
            ("expansion", "Growth / Scale"),
            ("commercializ", "Growth / Scale"),
            ("market-entry", "Growth / Scale"),
            ("market entry", "Growth / Scale"),
            ("mature", "Mature / Established"),
            ("established", "Mature / Established"),
            ("existing", "Mature / Established"),
        ])
    })
}

/// Audience facet. Specific needles precede general ones ("visible minorit"
/// before "minority" would be redundant; "social enterprise" must precede
/// "enterprise"-free needles that could otherwise shadow it).
pub fn audience_table() -> &'static KeywordTable {
    static TABLE: OnceLock<KeywordTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        KeywordTable::new([
            ("women", "Women"),
            ("woman", "Women"),
            ("female", "Women"),
            ("indigenous", "Indigenous"),
            ("first nation", "Indigenous"),
            ("metis", "Indigenous"),
            ("inuit", "Indigenous"),
            ("youth", "Youth"),
            ("student", "Youth"),
            ("young entrepreneur", "Youth"),
            ("newcomer", "Newcomers / Immigrants"),
            ("immigrant", "Newcomers / Immigrants"),
            ("refugee", "Newcomers / Immigrants"),
            ("black", "Black Entrepreneurs"),
            ("rural", "Rural"),
            ("veteran", "Veterans"),
            ("military", "Veterans"),
            ("disabilit", "Entrepreneurs with Disabilities"),
            ("accessib", "Entrepreneurs with Disabilities"),
            ("francophone", "Francophone"),
            ("french", "Francophone"),
            ("2slgbtq", "2SLGBTQ+"),
            ("lgbtq", "2SLGBTQ+"),
            ("queer", "2SLGBTQ+"),
            ("senior", "Seniors"),
            ("racialized", "Racialized Communities"),
            ("visible minorit", "Racialized Communities"),
            ("bipoc", "Racialized Communities"),
            ("social enterprise", "Social Enterprises / Non-profits"),
            ("non-profit", "Social Enterprises / Non-profits"),
            ("nonprofit", "Social Enterprises / Non-profits"),
            ("artist", "Arts / Creative"),
            ("creative", "Arts / Creative"),
            ("agri", "Agriculture"),
            ("farm", "Agriculture"),
            ("tourism", "Tourism"),
            ("manufactur", "Manufacturing"),
            ("technology", "Technology"),
            ("tech", "Technology"),
        ])
    })
}

/// Funding-type facet. Multi-hit by design: "tax credit" matches both the
/// "tax credit" and "credit" needles and contributes both labels.
pub fn funding_type_table() -> &'static KeywordTable {
    static TABLE: OnceLock<KeywordTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        KeywordTable::new([
            ("grant", "Grant"),
            ("non-repayable", "Grant"),
            ("nonrepayable", "Grant"),
            ("contribution", "Grant"),
            ("loan", "Loan"),
            ("microloan", "Loan"),
            ("financ", "Financing"),
            ("capital", "Financing"),
            ("subsid", "Subsidy"),
            ("tax credit", "Tax Credit"),
            ("taxcredit", "Tax Credit"),
            ("credit", "Credit"),
            ("line of credit", "Credit"),
            ("equity", "Equity Investment"),
            ("venture capital", "Equity Investment"),
            ("angel", "Equity Investment"),
            ("rebate", "Rebate"),
        ])
    })
}
