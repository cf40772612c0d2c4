use chrono::NaiveDate;
use pathfinder_core::derived::{
    amount_min_max, days_since, detailed_bands, freshness_label, identity_key, parse_amounts,
    FundingBucket, StatusClass,
};
use pathfinder_core::types::{DeriveConfig, ProgramRecord, RawProgram};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
}

fn config() -> DeriveConfig {
    DeriveConfig {
        funding_type_scans_text_fields: false,
        today: today(),
    }
}

#[test]
fn amounts_parse_thousands_separators_and_suffixes() {
    assert_eq!(parse_amounts("Up to $50,000"), vec![50_000.0]);
    assert_eq!(parse_amounts("$5K–$25K"), vec![5_000.0, 25_000.0]);
    assert_eq!(parse_amounts("1.5M"), vec![1_500_000.0]);
    assert!(parse_amounts("varies").is_empty());
}

#[test]
fn bucket_uses_last_figure_with_inclusive_lower_bound() {
    // Exactly 5000 lands in the band starting at 5000.
    assert_eq!(FundingBucket::from_text("5000"), FundingBucket::From5KTo25K);
    assert_eq!(FundingBucket::from_text("4999"), FundingBucket::Under5K);
    // Ranges bucket on the terminal figure.
    assert_eq!(
        FundingBucket::from_text("$10,000–$50,000"),
        FundingBucket::From25KTo100K
    );
    assert_eq!(FundingBucket::from_text("$200K"), FundingBucket::From100KTo500K);
    assert_eq!(FundingBucket::from_text("1.5M"), FundingBucket::Over500K);
    assert_eq!(FundingBucket::from_text("varies"), FundingBucket::Unknown);
}

#[test]
fn amount_range_spans_min_and_max() {
    let range = amount_min_max("$10K–$50K");
    assert_eq!(range.min, Some(10_000.0));
    assert_eq!(range.max, Some(50_000.0));
    assert!(range.overlaps(25_000.0, 100_000.0));
    assert!(range.overlaps(50_000.0, 60_000.0)); // inclusive at the edge
    assert!(!range.overlaps(60_000.0, 100_000.0));

    let unknown = amount_min_max("contact us");
    assert!(unknown.is_unknown());
    assert!(!unknown.overlaps(0.0, f64::INFINITY));
}

#[test]
fn detailed_bands_are_contiguous_and_monotonic() {
    let bands = detailed_bands();
    assert_eq!(bands.len(), 8);
    for pair in bands.windows(2) {
        let (_, (_, hi)) = pair[0];
        let (_, (lo, _)) = pair[1];
        assert_eq!(hi, lo);
    }
    assert_eq!(bands.last().unwrap().1 .1, f64::INFINITY);
}

#[test]
fn freshness_days_and_labels() {
    let (date, days) = days_since("2026-08-18", today());
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 18));
    assert_eq!(days, Some(10));
    assert_eq!(freshness_label(days), "10d ago");

    let (_, days) = days_since("2026-05-28", today());
    assert_eq!(days, Some(92));
    assert_eq!(freshness_label(days), "3mo ago");

    let (_, days) = days_since("2024-08-28", today());
    assert_eq!(days, Some(730));
    assert_eq!(freshness_label(days), "2y ago");

    let (date, days) = days_since("soon", today());
    assert_eq!(date, None);
    assert_eq!(days, None);
    assert_eq!(freshness_label(days), "—");
}

#[test]
fn identity_key_is_normalized_and_stable() {
    let key = identity_key("Grow Grant!", "ACME Corp.");
    assert_eq!(key, "growgrant|acmecorp");
    assert_eq!(key, identity_key("Grow Grant!", "ACME Corp."));
    // Blank inputs still produce a well-formed key.
    assert_eq!(identity_key("", ""), "|");
}

#[test]
fn status_classification_buckets_free_text() {
    assert_eq!(StatusClass::classify("Fully Operational"), StatusClass::Operational);
    assert_eq!(StatusClass::classify("Accepting applications"), StatusClass::Open);
    assert_eq!(StatusClass::classify("Paused until 2027"), StatusClass::Closed);
    assert_eq!(StatusClass::classify(""), StatusClass::Closed);
}

#[test]
fn record_derivation_computes_every_attribute_once() {
    let raw = RawProgram {
        program_name: "Grow Grant".into(),
        organization_name: "Prairie Fund".into(),
        tags_text: "grant; women; startup; mentorship".into(),
        funding_amount_text: "$10,000".into(),
        region_text: "Calgary".into(),
        last_checked_text: "2026-08-18".into(),
        status_text: "Open".into(),
        ..Default::default()
    };

    let record = ProgramRecord::derive(raw, &config());
    assert_eq!(record.identity_key, "growgrant|prairiefund");
    assert_eq!(record.funding_bucket, FundingBucket::From5KTo25K);
    assert_eq!(record.freshness_days, Some(10));
    assert_eq!(record.freshness_label, "10d ago");
    assert_eq!(record.status_class, StatusClass::Open);
    assert!(record.fund_type_set.contains("Grant"));
    assert!(record.audience_set.contains("Women"));
    assert!(record.stage_set.contains("Startup / Early Stage"));
    assert!(record.activity_set.contains("Mentorship"));
}

#[test]
fn facet_sets_grow_monotonically_with_added_tags() {
    let base = RawProgram {
        tags_text: "grant; startup".into(),
        ..Default::default()
    };
    let extended = RawProgram {
        tags_text: "grant; startup; mentor".into(),
        ..Default::default()
    };

    let a = ProgramRecord::derive(base, &config());
    let b = ProgramRecord::derive(extended, &config());

    assert!(a.activity_set.is_subset(&b.activity_set));
    assert!(a.stage_set.is_subset(&b.stage_set));
    assert!(a.audience_set.is_subset(&b.audience_set));
    assert!(a.fund_type_set.is_subset(&b.fund_type_set));
}

#[test]
fn funding_type_field_scan_is_opt_in() {
    let raw = RawProgram {
        description: "A non-repayable contribution for exporters".into(),
        ..Default::default()
    };

    let without = ProgramRecord::derive(raw.clone(), &config());
    assert!(without.fund_type_set.is_empty());

    let scan_config = DeriveConfig {
        funding_type_scans_text_fields: true,
        ..config()
    };
    let with = ProgramRecord::derive(raw, &scan_config);
    assert!(with.fund_type_set.contains("Grant"));
}
