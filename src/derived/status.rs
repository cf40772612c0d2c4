use serde::{Deserialize, Serialize};

/// Display classification of the free-text status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Operational,
    Open,
    Closed,
}

const OPEN_KEYWORDS: &[&str] = &["open", "active", "ongoing", "accepting", "rolling"];

impl StatusClass {
    pub fn classify(status_text: &str) -> Self {
        let s = status_text.to_lowercase();
        if s.contains("operational") {
            StatusClass::Operational
        } else if OPEN_KEYWORDS.iter().any(|k| s.contains(k)) {
            StatusClass::Open
        } else {
            StatusClass::Closed
        }
    }

    /// Fallback display label when the raw status text is blank.
    pub fn default_label(&self) -> &'static str {
        match self {
            StatusClass::Operational => "Operational",
            StatusClass::Open => "Open",
            StatusClass::Closed => "Closed / Paused",
        }
    }
}
