pub mod budget;
pub mod day;
pub mod line_item;
pub mod month_summary;
pub mod totals;
pub mod work_week;

use std::collections::BTreeMap;

/// Item key → number of units billed for a day.
/// Keys that are not present count as zero.
pub type CountMap = BTreeMap<String, u32>;
