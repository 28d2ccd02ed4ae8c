//! Floor-label parsing.
//!
//! Floor counts arrive as labels combining the ground floor with the upper
//! storeys, e.g. `"G+2"` or `"G + 3"`. A label without a `+` describes a
//! single-storey building.

use std::sync::LazyLock;

use regex::Regex;

/// Digits following the first `+`, with optional whitespace in between.
static UPPER_FLOORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\s*(\d+)").expect("valid floor label pattern"));

/// Number of upper floors encoded in a `G+N` label.
///
/// Returns `None` for labels without a `+` or without a parseable numeral
/// after it; a malformed label is never an error, it just carries no
/// upper-floor information.
#[must_use]
pub fn upper_floors(label: &str) -> Option<u32> {
    UPPER_FLOORS
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Total floor count implied by a label: upper floors plus the ground
/// floor, or a single storey when the label encodes none.
#[must_use]
pub fn total_floors(label: &str) -> u32 {
    upper_floors(label).map_or(1, |n| n + 1)
}

#[cfg(test)]
#[path = "floors_tests.rs"]
mod tests;
