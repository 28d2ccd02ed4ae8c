//! Report identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Fixed prefix carried by every report identifier.
pub const REPORT_ID_PREFIX: &str = "BBMP";

/// Process-wide sequence. The millisecond timestamp alone is not unique
/// when evaluations run back-to-back, so the suffix widens it.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A unique report identifier: prefix, millisecond timestamp, sequence.
#[must_use]
pub fn generate() -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{REPORT_ID_PREFIX}-{millis}-{seq:04}")
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
