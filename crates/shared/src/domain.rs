use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar window of a planned trip. Only constructible when the end date
/// does not precede the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TripWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        (to >= from).then_some(Self { from, to })
    }

    /// Inclusive day count; a same-day window is one day.
    pub fn day_count(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

/// Inclusive day count for a pair of raw date-field values (`YYYY-MM-DD`).
///
/// Returns `None` when either field is empty, fails to parse, or the range
/// runs backwards. Callers leave the days field untouched in that case.
pub fn inclusive_day_count(from_field: &str, to_field: &str) -> Option<i64> {
    let from = NaiveDate::parse_from_str(from_field.trim(), "%Y-%m-%d").ok()?;
    let to = NaiveDate::parse_from_str(to_field.trim(), "%Y-%m-%d").ok()?;
    TripWindow::new(from, to).map(|window| window.day_count())
}
