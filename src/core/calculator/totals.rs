use crate::core::catalog::CATALOG;
use crate::models::line_item::LineItemDefinition;
use crate::models::totals::TotalsResult;
use crate::models::CountMap;

/// Loading applied to the base-amount component only.
pub const LOADING_RATE: f64 = 0.0625;

/// Totals over the built-in pricing catalog.
pub fn compute_totals(counts: &CountMap) -> TotalsResult {
    compute_totals_with(CATALOG, counts)
}

/// Totals over an explicit catalog.
///
/// Walks the catalog rather than `counts`, so the result does not depend on
/// the map's key order. Keys absent from the catalog are ignored; items
/// absent from `counts` contribute nothing.
pub fn compute_totals_with(catalog: &[LineItemDefinition], counts: &CountMap) -> TotalsResult {
    let mut total_minutes: i64 = 0;
    let mut amount_with_bbi = 0.0;
    let mut amount_without_bbi = 0.0;

    for item in catalog {
        let count = counts.get(item.key).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let n = count as f64;

        total_minutes += i64::from(count) * i64::from(item.minutes_per_unit);
        amount_with_bbi += n * item.unit_amount();
        amount_without_bbi += n * item.base_amount;
    }

    let loading_amount = LOADING_RATE * amount_without_bbi;

    TotalsResult {
        total_minutes,
        total_hours: hours_for(total_minutes),
        amount_with_bbi,
        amount_without_bbi,
        loading_amount,
        grand_total: amount_with_bbi + loading_amount,
    }
}

/// Whole hours needed to cover `minutes`, rounded up.
pub fn hours_for(minutes: i64) -> i64 {
    if minutes <= 0 {
        return 0;
    }
    (minutes + 59) / 60
}
