//! Service layer: orchestrates backend calls and shapes page data.

use chrono::{Datelike, Utc};
use thiserror::Error;

use crate::backend::PeriodQuery;
use crate::backend::errors::BackendError;
use crate::domain::daygrid::DayGridError;

pub mod calendar;
pub mod matrix;
pub mod upload;

pub const DEFAULT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A client-side check failed before any request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    DayGrid(#[from] DayGridError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Resolves missing filter values to the current month and first version.
pub(crate) fn resolve_period(
    month: Option<u32>,
    year: Option<i32>,
    version: Option<u32>,
) -> PeriodQuery {
    let today = Utc::now().date_naive();
    PeriodQuery::new(month.unwrap_or_else(|| today.month()), year.unwrap_or_else(|| today.year()))
        .version(version.unwrap_or(DEFAULT_VERSION))
}
