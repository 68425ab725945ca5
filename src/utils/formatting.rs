//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Currency, always two decimals.
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Currency with a symbol, e.g. `$59.81`.
pub fn money_with(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// 125 → "02h 05m"
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
