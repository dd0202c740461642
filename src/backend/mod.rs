//! HTTP client layer over the external DI backend.
//!
//! Shaped like a repository layer: narrow reader/writer traits so the
//! service layer stays testable without a live backend.

use async_trait::async_trait;

use crate::backend::errors::BackendResult;
use crate::domain::calendar::CalendarDay;
use crate::domain::document::{
    DocumentSlot, ManualHeader, QuantityEntry, UploadReceipt, UploadedDocument,
};
use crate::domain::matrix::PartMatrix;

pub mod errors;
pub mod rest;

/// Month/year/version filter attached to the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodQuery {
    pub month: u32,
    pub year: i32,
    pub version: u32,
}

impl PeriodQuery {
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month,
            year,
            version: 1,
        }
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

#[async_trait]
pub trait CalendarReader {
    /// Aggregated per-date delivery totals for the selected period.
    async fn delivery_calendar(&self, query: &PeriodQuery) -> BackendResult<Vec<CalendarDay>>;
}

#[async_trait]
pub trait MatrixReader {
    /// Per-part daily quantity rows for the selected period.
    async fn matrix_table(&self, query: &PeriodQuery) -> BackendResult<Vec<PartMatrix>>;
}

#[async_trait]
pub trait DocumentWriter {
    /// Submits a PDF for OCR extraction and storage.
    async fn upload_document(
        &self,
        slot: &DocumentSlot,
        document: UploadedDocument,
    ) -> BackendResult<UploadReceipt>;

    /// Submits a manually keyed header together with its quantity rows.
    async fn manual_upload(
        &self,
        slot: &DocumentSlot,
        header: &ManualHeader,
        quantities: &[QuantityEntry],
    ) -> BackendResult<UploadReceipt>;
}
