use pathfinder_core::normalize::{
    activity_table, audience_table, funding_type_table, stage_table, tokenize,
};

#[test]
fn tokenizer_splits_on_all_delimiters_and_lowercases() {
    let tokens = tokenize("Grant; Women / Startup | Mentorship, Rural");
    assert_eq!(
        tokens,
        vec!["grant", "women", "startup", "mentorship", "rural"]
    );
}

#[test]
fn tokenizer_drops_urls_domains_and_short_numbers() {
    let tokens = tokenize("grant; www.example.com; 2024; visit alberta.ca; 12345");
    // 1-4 digit tokens are stray figures; 5+ digits are kept as-is.
    assert_eq!(tokens, vec!["grant", "12345"]);
}

#[test]
fn tokenizer_splits_full_urls_before_dropping_domain_pieces() {
    // "/" is a delimiter, so a pasted URL fragments first and only the
    // pieces that still look like domains get dropped.
    let tokens = tokenize("http://example.com/grants; funding");
    assert_eq!(tokens, vec!["http:", "grants", "funding"]);
}

#[test]
fn tokenizer_keeps_duplicates_and_order() {
    assert_eq!(tokenize("loan, loan; grant"), vec!["loan", "loan", "grant"]);
}

#[test]
fn tokenizer_is_pure() {
    let raw = "Mentorship; 12; www.x.com; seed";
    assert_eq!(tokenize(raw), tokenize(raw));
}

#[test]
fn normalize_first_matching_needle_wins() {
    // "mentoring workshops" contains both "mentor" and "workshop"; the
    // earlier table entry decides.
    assert_eq!(
        activity_table().normalize("mentoring workshops"),
        Some("Mentorship")
    );
    assert_eq!(activity_table().normalize("workshop series"), Some("Workshops / Training"));
}

#[test]
fn normalize_miss_contributes_nothing() {
    assert_eq!(activity_table().normalize("basket weaving"), None);
    assert_eq!(stage_table().normalize(""), None);
    assert_eq!(stage_table().normalize("   "), None);
}

#[test]
fn stage_synonyms_collapse_to_canonical_labels() {
    for tag in ["startup", "pre-seed", "ideation", "prototype"] {
        assert_eq!(stage_table().normalize(tag), Some("Startup / Early Stage"));
    }
    for tag in ["scaleup", "scale-up", "growth", "commercialization"] {
        assert_eq!(stage_table().normalize(tag), Some("Growth / Scale"));
    }
    assert_eq!(stage_table().normalize("established business"), Some("Mature / Established"));
}

#[test]
fn audience_labels_cover_spec_examples() {
    assert_eq!(audience_table().normalize("women-owned"), Some("Women"));
    assert_eq!(audience_table().normalize("metis"), Some("Indigenous"));
    assert_eq!(audience_table().normalize("students"), Some("Youth"));
    assert_eq!(audience_table().normalize("rural communities"), Some("Rural"));
    assert!(audience_table().labels().len() >= 15);
}

#[test]
fn funding_type_is_multi_hit() {
    // "tax credit" satisfies both the "tax credit" and "credit" needles.
    let hits = funding_type_table().match_all("tax credit");
    assert_eq!(hits, vec!["Tax Credit", "Credit"]);

    let hits = funding_type_table().match_all("venture capital fund");
    assert!(hits.contains(&"Equity Investment"));
    assert!(hits.contains(&"Financing"));
}

#[test]
fn funding_type_option_list_is_deduplicated_in_table_order() {
    let labels = funding_type_table().labels();
    assert_eq!(labels[0], "Grant");
    assert_eq!(labels[1], "Loan");
    let mut unique = labels.clone();
    unique.dedup();
    assert_eq!(labels, unique);
}
