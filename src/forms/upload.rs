use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use serde::Deserialize;

use crate::domain::document::{DocumentSlot, ManualHeader, QuantityEntry};

/// OCR-mode submission: the PDF plus its addressing fields.
#[derive(MultipartForm)]
pub struct UploadDocumentForm {
    #[multipart(limit = "20MB")]
    pub file: Option<TempFile>,
    pub factory: Text<String>,
    pub month_year: Text<String>,
    pub bucket: Text<String>,
    pub version: Text<String>,
}

impl UploadDocumentForm {
    pub fn slot(&self) -> DocumentSlot {
        DocumentSlot {
            factory: self.factory.0.clone(),
            month_year: self.month_year.0.clone(),
            bucket: self.bucket.0.clone(),
            version: self.version.0.clone(),
        }
    }
}

/// Manual-mode submission decoded from the urlencoded body.
///
/// Every field defaults so an incomplete form still submits; whatever
/// validation applies is the backend's.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ManualEntryForm {
    #[serde(default)]
    pub factory: String,
    #[serde(default)]
    pub month_year: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub purchase_schedule: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_code: String,
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub part_desc: String,
    /// Repeated once per editor row.
    #[serde(default)]
    pub date: Vec<String>,
    #[serde(default)]
    pub qty: Vec<String>,
}

impl ManualEntryForm {
    /// Decodes the raw urlencoded body, keeping the repeated row fields.
    pub fn from_urlencoded(body: &[u8]) -> Result<Self, serde_html_form::de::Error> {
        serde_html_form::from_bytes(body)
    }

    pub fn slot(&self) -> DocumentSlot {
        DocumentSlot {
            factory: self.factory.clone(),
            month_year: self.month_year.clone(),
            bucket: self.bucket.clone(),
            version: self.version.clone(),
        }
    }

    pub fn header(&self) -> ManualHeader {
        ManualHeader {
            purchase_schedule: self.purchase_schedule.clone(),
            customer_name: self.customer_name.clone(),
            customer_code: self.customer_code.clone(),
            part_number: self.part_number.clone(),
            part_desc: self.part_desc.clone(),
        }
    }

    /// Pairs the positional date/qty columns back into rows.
    pub fn quantities(&self) -> Vec<QuantityEntry> {
        self.date
            .iter()
            .zip(self.qty.iter())
            .map(|(date, qty)| QuantityEntry {
                date: date.clone(),
                qty: qty.clone(),
            })
            .collect()
    }
}
