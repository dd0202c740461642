//! reqwest-backed implementation of the backend traits.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{CalendarReader, DocumentWriter, MatrixReader, PeriodQuery};
use crate::domain::calendar::CalendarDay;
use crate::domain::document::{
    DocumentSlot, ManualHeader, QuantityEntry, UploadReceipt, UploadedDocument,
};
use crate::domain::matrix::PartMatrix;

/// Response wrapper shared by the read endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    #[serde(default)]
    message: Option<String>,
}

impl<T> Envelope<T> {
    /// A non-success status is a failure regardless of any payload.
    fn into_data(self) -> BackendResult<Vec<T>> {
        if self.status == "success" {
            Ok(self.data)
        } else {
            Err(BackendError::Application(
                self.message.unwrap_or(self.status),
            ))
        }
    }
}

/// Client for the DI backend REST API.
#[derive(Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PeriodQuery,
    ) -> BackendResult<Vec<T>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&[
                ("month", query.month.to_string()),
                ("year", query.year.to_string()),
                ("version", query.version.to_string()),
            ])
            .send()
            .await?;

        response.json::<Envelope<T>>().await?.into_data()
    }

    fn slot_form(slot: &DocumentSlot) -> reqwest::multipart::Form {
        reqwest::multipart::Form::new()
            .text("factory", slot.factory.clone())
            .text("month_year", slot.month_year.clone())
            .text("bucket", slot.bucket.clone())
            .text("version", slot.version.clone())
    }

    async fn submit(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> BackendResult<UploadReceipt> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Application(format!("{status}: {body}")));
        }

        Ok(response.json::<UploadReceipt>().await?)
    }
}

#[async_trait]
impl CalendarReader for RestBackend {
    async fn delivery_calendar(&self, query: &PeriodQuery) -> BackendResult<Vec<CalendarDay>> {
        self.fetch_list("/api/delivery-calendar", query).await
    }
}

#[async_trait]
impl MatrixReader for RestBackend {
    async fn matrix_table(&self, query: &PeriodQuery) -> BackendResult<Vec<PartMatrix>> {
        self.fetch_list("/api/matrixtable", query).await
    }
}

#[async_trait]
impl DocumentWriter for RestBackend {
    async fn upload_document(
        &self,
        slot: &DocumentSlot,
        document: UploadedDocument,
    ) -> BackendResult<UploadReceipt> {
        let part =
            reqwest::multipart::Part::bytes(document.bytes).file_name(document.file_name);
        let form = Self::slot_form(slot).part("file", part);

        self.submit("/upload", form).await
    }

    async fn manual_upload(
        &self,
        slot: &DocumentSlot,
        header: &ManualHeader,
        quantities: &[QuantityEntry],
    ) -> BackendResult<UploadReceipt> {
        let form = Self::slot_form(slot)
            .text("manual_data", serde_json::to_string(header)?)
            .text("quantities", serde_json::to_string(quantities)?);

        self.submit("/manual_upload", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let envelope: Envelope<CalendarDay> = serde_json::from_str(
            r#"{"status": "success", "data": [{"date": "2025-10-05", "total_parts": 3, "total_qty": 120}]}"#,
        )
        .unwrap();

        let data = envelope.into_data().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].total_parts, 3);
    }

    #[test]
    fn error_status_is_an_application_failure() {
        let envelope: Envelope<CalendarDay> = serde_json::from_str(
            r#"{"status": "error", "message": "relation does not exist"}"#,
        )
        .unwrap();

        match envelope.into_data() {
            Err(BackendError::Application(message)) => {
                assert_eq!(message, "relation does not exist");
            }
            other => panic!("expected application failure, got {other:?}"),
        }
    }

    #[test]
    fn error_status_without_message_reports_the_status() {
        let envelope: Envelope<PartMatrix> =
            serde_json::from_str(r#"{"status": "failed"}"#).unwrap();

        match envelope.into_data() {
            Err(BackendError::Application(message)) => assert_eq!(message, "failed"),
            other => panic!("expected application failure, got {other:?}"),
        }
    }

    #[test]
    fn matrix_envelope_parses_sparse_days() {
        let envelope: Envelope<PartMatrix> = serde_json::from_str(
            r#"{"status": "success", "data": [{"part_number": "P1", "part_desc": "Bracket", "days": {"5": 10}}, {"part_number": "P2", "part_desc": "Clip", "days": {}}]}"#,
        )
        .unwrap();

        let parts = envelope.into_data().unwrap();
        assert_eq!(parts[0].qty_on(5), 10);
        assert!(parts[1].days.is_empty());
    }

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let backend = RestBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url, "http://localhost:8000");
    }
}
