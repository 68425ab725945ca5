//! Pricing catalog: the ordered table of billable items.
//!
//! Order matters. The totals engine, the category grouping in `show` and the
//! export rows all walk this table front to back.

use crate::models::line_item::LineItemDefinition;

const BBI: f64 = 8.60;

macro_rules! item {
    ($key:literal, $label:literal, $minutes:literal, $base:literal, $bbi:expr) => {
        LineItemDefinition {
            key: $key,
            label: $label,
            minutes_per_unit: $minutes,
            base_amount: $base,
            bbi_amount: $bbi,
        }
    };
}

pub const CATALOG: &[LineItemDefinition] = &[
    // Residential aged care attendances
    item!("consult_a_90020", "Level A consult (RACF) 90020", 2, 20.05, BBI),
    item!("consult_b_90035", "Level B consult (RACF) 90035", 10, 43.90, BBI),
    item!("consult_c_90043", "Level C consult (RACF) 90043", 25, 84.90, BBI),
    item!("consult_d_90051", "Level D consult (RACF) 90051", 45, 125.10, BBI),
    item!("consult_e_90054", "Level E consult (RACF) 90054", 60, 173.30, BBI),
    // Video / phone
    item!("telehealth_b_91800", "Video Level B 91800", 10, 43.90, BBI),
    item!("telehealth_c_91801", "Video Level C 91801", 25, 84.90, BBI),
    item!("telehealth_d_91802", "Video Level D 91802", 45, 125.10, BBI),
    item!("phone_b_91891", "Phone Level B 91891", 10, 43.90, BBI),
    // Procedures
    item!("procedure_ecg_11707", "ECG tracing 11707", 10, 14.25, 0.0),
    item!("procedure_spirometry_11506", "Spirometry 11506", 15, 21.15, 0.0),
    item!("procedure_wound_30026", "Wound repair 30026", 20, 57.80, 0.0),
    // Care planning
    item!("care_plan_gpmp_721", "GP Management Plan 721", 40, 164.35, 0.0),
    item!("care_plan_tca_723", "Team Care Arrangement 723", 30, 130.20, 0.0),
    item!("care_plan_review_732", "GPMP/TCA Review 732", 20, 82.10, 0.0),
    item!("assessment_75plus_703", "Health assessment 75+ 703", 45, 246.15, 0.0),
    item!("assessment_cmr_903", "Medication review (RACF) 903", 40, 113.15, 0.0),
];

/// Look up an item by key.
pub fn find(key: &str) -> Option<&'static LineItemDefinition> {
    CATALOG.iter().find(|item| item.key == key)
}

pub fn contains(key: &str) -> bool {
    find(key).is_some()
}
