use serde::{Deserialize, Serialize};

/// Addressing fields shared by both submission modes.
///
/// Bucket and version ranges are the backend's concern; the portal passes
/// them through as entered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentSlot {
    pub factory: String,
    pub month_year: String,
    pub bucket: String,
    pub version: String,
}

/// Manually keyed DI header. Field names are camelCase on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManualHeader {
    pub purchase_schedule: String,
    pub customer_name: String,
    pub customer_code: String,
    pub part_number: String,
    pub part_desc: String,
}

/// One user-entered (date, quantity) row, submitted as typed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct QuantityEntry {
    pub date: String,
    pub qty: String,
}

/// In-memory copy of an uploaded PDF.
#[derive(Clone, Debug)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Backend acknowledgement for either submission mode.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UploadReceipt {
    /// The backend has shipped this under both names across revisions.
    #[serde(default, alias = "header")]
    pub extracted_header: serde_json::Value,
    #[serde(default)]
    pub saved_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_header_serializes_camel_case() {
        let header = ManualHeader {
            purchase_schedule: "PS-1".to_string(),
            customer_name: "Acme".to_string(),
            customer_code: "AC01".to_string(),
            part_number: "P1".to_string(),
            part_desc: "Bracket".to_string(),
        };

        let json = serde_json::to_value(&header).unwrap();

        assert_eq!(json["purchaseSchedule"], "PS-1");
        assert_eq!(json["customerName"], "Acme");
        assert_eq!(json["partDesc"], "Bracket");
    }

    #[test]
    fn receipt_accepts_legacy_header_key() {
        let receipt: UploadReceipt = serde_json::from_str(
            r#"{"header": {"customerName": "Acme"}, "saved_to": "PDFs/F1/102025/di.pdf"}"#,
        )
        .unwrap();

        assert_eq!(receipt.extracted_header["customerName"], "Acme");
        assert_eq!(receipt.saved_to, "PDFs/F1/102025/di.pdf");
    }

    #[test]
    fn receipt_accepts_documented_key() {
        let receipt: UploadReceipt =
            serde_json::from_str(r#"{"extracted_header": {"partNumber": "P1"}, "saved_to": "x"}"#)
                .unwrap();

        assert_eq!(receipt.extracted_header["partNumber"], "P1");
    }
}
