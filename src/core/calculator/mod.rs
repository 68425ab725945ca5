pub mod month;
pub mod totals;
pub mod week;
