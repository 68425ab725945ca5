use rbilllog::core::calculator::totals::{LOADING_RATE, compute_totals, compute_totals_with, hours_for};
use rbilllog::core::catalog::{self, CATALOG};
use rbilllog::models::CountMap;
use rbilllog::models::line_item::LineItemDefinition;

mod common;
use common::approx;

fn counts(pairs: &[(&str, u32)]) -> CountMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_level_a_consult_scenario() {
    let t = compute_totals(&counts(&[("consult_a_90020", 2)]));

    assert_eq!(t.total_minutes, 4);
    assert_eq!(t.total_hours, 1);
    assert!(approx(t.amount_with_bbi, 57.30));
    assert!(approx(t.amount_without_bbi, 40.10));
    assert!(approx(t.loading_amount, 2.50625));
    assert!(approx(t.grand_total, 59.80625));
    assert_eq!(format!("{:.2}", t.grand_total), "59.81");
}

#[test]
fn test_empty_counts_are_all_zero() {
    let t = compute_totals(&CountMap::new());

    assert_eq!(t.total_minutes, 0);
    assert_eq!(t.total_hours, 0);
    assert_eq!(t.amount_with_bbi, 0.0);
    assert_eq!(t.amount_without_bbi, 0.0);
    assert_eq!(t.loading_amount, 0.0);
    assert_eq!(t.grand_total, 0.0);
    assert!(t.is_zero());
}

#[test]
fn test_explicit_zero_counts_match_empty() {
    let zeros: CountMap = CATALOG.iter().map(|i| (i.key.to_string(), 0)).collect();
    assert_eq!(compute_totals(&zeros), compute_totals(&CountMap::new()));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let with_unknown = counts(&[("consult_b_90035", 1), ("not_an_item", 50)]);
    let without = counts(&[("consult_b_90035", 1)]);
    assert_eq!(compute_totals(&with_unknown), compute_totals(&without));
}

#[test]
fn test_grand_total_is_with_bbi_plus_loading_on_base() {
    let samples = [
        counts(&[("consult_c_90043", 4), ("procedure_ecg_11707", 2)]),
        counts(&[("care_plan_tca_723", 1), ("telehealth_b_91800", 7)]),
        counts(&[("assessment_75plus_703", 3)]),
        CATALOG.iter().map(|i| (i.key.to_string(), 5)).collect(),
    ];

    for c in &samples {
        let t = compute_totals(c);
        assert!(approx(t.loading_amount, LOADING_RATE * t.amount_without_bbi));
        assert!(approx(t.grand_total, t.amount_with_bbi + t.loading_amount));
    }
}

#[test]
fn test_hours_are_ceiling_of_minutes() {
    assert_eq!(hours_for(0), 0);
    assert_eq!(hours_for(1), 1);
    assert_eq!(hours_for(59), 1);
    assert_eq!(hours_for(60), 1);
    assert_eq!(hours_for(61), 2);
    assert_eq!(hours_for(120), 2);

    // 6 × 10 min = 60 min → exactly one hour
    let t = compute_totals(&counts(&[("consult_b_90035", 6)]));
    assert_eq!(t.total_minutes, 60);
    assert_eq!(t.total_hours, 1);

    // 7 × 10 min = 70 min → two hours
    let t = compute_totals(&counts(&[("consult_b_90035", 7)]));
    assert_eq!(t.total_hours, 2);
}

#[test]
fn test_compute_is_idempotent() {
    let c = counts(&[("consult_d_90051", 2), ("phone_b_91891", 1)]);
    assert_eq!(compute_totals(&c), compute_totals(&c));
}

#[test]
fn test_items_without_bbi_add_no_secondary_amount() {
    let t = compute_totals(&counts(&[("procedure_spirometry_11506", 2)]));
    assert!(approx(t.amount_with_bbi, t.amount_without_bbi));
    assert!(approx(t.amount_without_bbi, 42.30));
}

#[test]
fn test_custom_catalog() {
    let catalog = [
        LineItemDefinition {
            key: "x",
            label: "X",
            minutes_per_unit: 30,
            base_amount: 100.0,
            bbi_amount: 10.0,
        },
        LineItemDefinition {
            key: "y",
            label: "Y",
            minutes_per_unit: 45,
            base_amount: 16.0,
            bbi_amount: 0.0,
        },
    ];

    let t = compute_totals_with(&catalog, &counts(&[("x", 1), ("y", 1)]));
    assert_eq!(t.total_minutes, 75);
    assert_eq!(t.total_hours, 2);
    assert!(approx(t.amount_with_bbi, 126.0));
    assert!(approx(t.amount_without_bbi, 116.0));
    assert!(approx(t.loading_amount, 7.25));
    assert!(approx(t.grand_total, 133.25));
}

#[test]
fn test_catalog_keys_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a.key, b.key);
        }
        assert!(catalog::contains(a.key));
    }
    assert_eq!(
        catalog::find("consult_a_90020").map(|i| i.minutes_per_unit),
        Some(2)
    );
    assert!(catalog::find("nope").is_none());
}
