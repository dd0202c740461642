use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One aggregated backend record: delivery totals for a single date.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub total_parts: i64,
    pub total_qty: i64,
}

/// A marker plotted on the month grid.
///
/// Rebuilt from scratch on every fetch; never persisted.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
}

impl From<CalendarDay> for CalendarEvent {
    fn from(day: CalendarDay) -> Self {
        Self {
            date: day.date,
            title: format!("{} parts • {} pcs", day.total_parts, day.total_qty),
        }
    }
}
