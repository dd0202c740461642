use serde::{Deserialize, Serialize};

/// Query parameters accepted by the upload page.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    /// Active submission mode, `ocr` or `manual`.
    pub mode: Option<String>,
}

/// Slot values prefilled on a fresh upload form.
#[derive(Debug, Serialize)]
pub struct UploadDefaults {
    pub factory: &'static str,
    pub month_year: &'static str,
    pub bucket: &'static str,
    pub version: &'static str,
}

impl Default for UploadDefaults {
    fn default() -> Self {
        Self {
            factory: "F1",
            month_year: "102025",
            bucket: "1",
            version: "1",
        }
    }
}
