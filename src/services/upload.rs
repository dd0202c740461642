use crate::backend::DocumentWriter;
use crate::domain::document::{UploadReceipt, UploadedDocument};
use crate::forms::upload::{ManualEntryForm, UploadDocumentForm};
use crate::services::{ServiceError, ServiceResult};

/// Forwards an OCR-mode submission to the backend.
///
/// The only client-side check is that a file was actually attached; a
/// missing file never reaches the network.
pub async fn process_document_upload<B>(
    backend: &B,
    form: UploadDocumentForm,
) -> ServiceResult<UploadReceipt>
where
    B: DocumentWriter + ?Sized,
{
    let slot = form.slot();

    let file = form
        .file
        .filter(|file| file.size > 0)
        .ok_or_else(|| ServiceError::Validation("Please select a PDF file first.".to_string()))?;

    let bytes = std::fs::read(file.file.path())
        .map_err(|err| ServiceError::Internal(format!("failed to read uploaded file: {err}")))?;
    let file_name = file.file_name.unwrap_or_else(|| "document.pdf".to_string());

    let receipt = backend
        .upload_document(&slot, UploadedDocument { file_name, bytes })
        .await?;

    Ok(receipt)
}

/// Forwards a manual-mode submission to the backend.
///
/// Field completeness is deliberately not checked here; incomplete drafts
/// are the backend's call.
pub async fn process_manual_entry<B>(
    backend: &B,
    form: ManualEntryForm,
) -> ServiceResult<UploadReceipt>
where
    B: DocumentWriter + ?Sized,
{
    let receipt = backend
        .manual_upload(&form.slot(), &form.header(), &form.quantities())
        .await?;

    Ok(receipt)
}
