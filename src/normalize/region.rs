//! Region matching is a normalization table applied at filter time rather
//! than at load time: a selected region label matches a row when any of the
//! label's keywords is a substring of the row's raw region text. Keyword
//! sets overlap on purpose; "southern alberta" satisfies both Calgary and
//! Rural Alberta.

const REGION_TABLE: &[(&str, &[&str])] = &[
    ("Calgary", &["calgary", "southern alberta", "foothills"]),
    ("Edmonton", &["edmonton", "capital region", "central alberta"]),
    (
        "Rural Alberta",
        &[
            "rural",
            "north",
            "northern alberta",
            "east central",
            "south",
            "southern alberta",
            "central alberta",
            "mountain view",
            "parkland",
        ],
    ),
    (
        "Canada",
        &["canada", "national", "federal", "pan-canadian", "international"],
    ),
];

/// The fixed candidate option list for the region facet.
pub fn labels() -> Vec<&'static str> {
    REGION_TABLE.iter().map(|(label, _)| *label).collect()
}

/// True when the raw region text satisfies the selected region label.
/// Unknown labels match nothing.
pub fn matches(region_text: &str, selected: &str) -> bool {
    let v = region_text.to_lowercase();
    if v.is_empty() {
        return false;
    }
    REGION_TABLE
        .iter()
        .find(|(label, _)| *label == selected)
        .map(|(_, keywords)| keywords.iter().any(|word| v.contains(word)))
        .unwrap_or(false)
}
