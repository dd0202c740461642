use std::collections::HashMap;

use chrono::NaiveDate;

use crate::backend::CalendarReader;
use crate::domain::calendar::CalendarEvent;
use crate::domain::daygrid::month_weeks;
use crate::dto::calendar::{CalendarCell, CalendarPageData, CalendarQuery};
use crate::services::{ServiceResult, resolve_period};

/// Loads and lays out the calendar page for the requested period.
///
/// Read failures degrade to an empty grid; the error is only logged.
pub async fn load_calendar_page<B>(
    backend: &B,
    query: CalendarQuery,
) -> ServiceResult<CalendarPageData>
where
    B: CalendarReader + ?Sized,
{
    let period = resolve_period(query.month, query.year, query.version);
    let weeks = month_weeks(period.month, period.year)?;

    let days = match backend.delivery_calendar(&period).await {
        Ok(days) => days,
        Err(err) => {
            log::error!("Failed to fetch delivery calendar: {err}");
            Vec::new()
        }
    };

    // One marker per date; a later record for the same date wins.
    let mut events: HashMap<NaiveDate, CalendarEvent> = HashMap::new();
    for day in days {
        let event = CalendarEvent::from(day);
        events.insert(event.date, event);
    }
    let total_events = events.len();

    let weeks = weeks
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|slot| {
                    slot.map(|day| {
                        let event = NaiveDate::from_ymd_opt(period.year, period.month, day)
                            .and_then(|date| events.remove(&date));
                        CalendarCell { day, event }
                    })
                })
                .collect()
        })
        .collect();

    Ok(CalendarPageData {
        month: period.month,
        year: period.year,
        version: period.version,
        weeks,
        total_events,
    })
}
