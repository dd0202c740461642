//! Day-grid arithmetic shared by the calendar and matrix views.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors produced for filter values no calendar month can satisfy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DayGridError {
    #[error("month out of range: {0}")]
    InvalidMonth(u32),

    #[error("year out of range: {0}")]
    InvalidYear(i32),
}

/// Returns the ordered day numbers `1..=N` for the given month.
///
/// `N` is the calendar-correct day count, leap-year February included.
pub fn days_in_month(month: u32, year: i32) -> Result<Vec<u32>, DayGridError> {
    if !(1..=12).contains(&month) {
        return Err(DayGridError::InvalidMonth(month));
    }

    let first = first_of_month(month, year)?;
    let next = if month == 12 {
        let year = year.checked_add(1).ok_or(DayGridError::InvalidYear(year))?;
        first_of_month(1, year)
    } else {
        first_of_month(month + 1, year)
    }?;

    let count = next.signed_duration_since(first).num_days() as u32;
    Ok((1..=count).collect())
}

/// Chunks the month into Sunday-first calendar weeks.
///
/// Leading and trailing slots outside the month are `None`.
pub fn month_weeks(month: u32, year: i32) -> Result<Vec<Vec<Option<u32>>>, DayGridError> {
    let days = days_in_month(month, year)?;
    let lead = first_of_month(month, year)?.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week: Vec<Option<u32>> = vec![None; lead];
    for day in days {
        week.push(Some(day));
        if week.len() == 7 {
            weeks.push(week);
            week = Vec::new();
        }
    }
    if !week.is_empty() {
        week.resize(7, None);
        weeks.push(week);
    }

    Ok(weeks)
}

/// Anchors the month to its first day, rejecting years chrono cannot represent.
pub fn first_of_month(month: u32, year: i32) -> Result<NaiveDate, DayGridError> {
    if !(1..=12).contains(&month) {
        return Err(DayGridError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(DayGridError::InvalidYear(year))
}
