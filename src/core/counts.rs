//! Turning `KEY=COUNT` arguments into a validated count map.

use crate::core::catalog;
use crate::errors::{AppError, AppResult};
use crate::models::CountMap;
use regex::Regex;
use std::sync::LazyLock;

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("count pattern"));

/// Parse one `KEY=COUNT` pair.
pub fn parse_item_arg(arg: &str) -> AppResult<(String, u32)> {
    let (key, count) = arg
        .split_once('=')
        .ok_or_else(|| AppError::InvalidCount(format!("'{arg}' is not KEY=COUNT")))?;

    let key = key.trim();
    let count = count.trim();

    if !catalog::contains(key) {
        return Err(AppError::UnknownItem(key.to_string()));
    }

    let invalid = || {
        AppError::InvalidCount(format!(
            "'{count}' for {key} is not a non-negative integer"
        ))
    };

    if !COUNT_RE.is_match(count) {
        return Err(invalid());
    }
    let n: u32 = count.parse().map_err(|_| invalid())?;

    Ok((key.to_string(), n))
}

/// Parse every `--item` argument. A key given more than once has its counts
/// added together.
pub fn parse_item_args(args: &[String]) -> AppResult<CountMap> {
    let mut counts = CountMap::new();
    for arg in args {
        let (key, n) = parse_item_arg(arg)?;
        let slot = counts.entry(key).or_insert(0);
        *slot = slot
            .checked_add(n)
            .ok_or_else(|| AppError::InvalidCount(format!("count overflow for '{arg}'")))?;
    }
    Ok(counts)
}
