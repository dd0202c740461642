use serde::{Deserialize, Serialize};

use crate::domain::calendar::CalendarEvent;

/// Query parameters accepted by the calendar page.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub version: Option<u32>,
}

/// One in-month cell of the rendered grid.
#[derive(Debug, Serialize, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    pub event: Option<CalendarEvent>,
}

/// Data required to render the calendar template.
#[derive(Debug, Serialize)]
pub struct CalendarPageData {
    pub month: u32,
    pub year: i32,
    pub version: u32,
    /// Sunday-first weeks; `None` slots pad the month edges.
    pub weeks: Vec<Vec<Option<CalendarCell>>>,
    pub total_events: usize,
}
