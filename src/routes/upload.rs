use actix_multipart::form::MultipartForm;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::rest::RestBackend;
use crate::domain::document::UploadReceipt;
use crate::dto::upload::{UploadDefaults, UploadQuery};
use crate::forms::upload::{ManualEntryForm, UploadDocumentForm};
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::upload::{process_document_upload, process_manual_entry};

fn upload_context(flash_messages: &IncomingFlashMessages, mode: &str) -> tera::Context {
    let mut context = base_context(flash_messages, "upload");
    context.insert("mode", mode);
    context.insert("defaults", &UploadDefaults::default());
    context
}

fn receipt_page(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    mode: &str,
    status_message: &str,
    receipt: &UploadReceipt,
) -> actix_web::HttpResponse {
    let mut context = upload_context(flash_messages, mode);
    context.insert("status_message", status_message);
    context.insert("receipt", receipt);
    render_template(tera, "upload/index.html", &context)
}

#[get("/upload")]
pub async fn show_upload(
    params: web::Query<UploadQuery>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mode = match params.mode.as_deref() {
        Some("ocr") => "ocr",
        _ => "manual",
    };

    let context = upload_context(&flash_messages, mode);
    render_template(&tera, "upload/index.html", &context)
}

#[post("/upload")]
pub async fn upload_document(
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    MultipartForm(form): MultipartForm<UploadDocumentForm>,
) -> impl Responder {
    match process_document_upload(backend.get_ref(), form).await {
        Ok(receipt) => receipt_page(
            &tera,
            &flash_messages,
            "ocr",
            "File processed successfully.",
            &receipt,
        ),
        Err(ServiceError::Validation(message)) => {
            FlashMessage::error(message).send();
            redirect("/upload?mode=ocr")
        }
        Err(err) => {
            log::error!("Failed to process uploaded document: {err}");
            FlashMessage::error("Error processing file.").send();
            redirect("/upload?mode=ocr")
        }
    }
}

#[post("/manual_upload")]
pub async fn manual_upload(
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    body: web::Bytes,
) -> impl Responder {
    let form = match ManualEntryForm::from_urlencoded(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to decode manual entry form: {err}");
            FlashMessage::error("Could not read the submitted form.").send();
            return redirect("/upload");
        }
    };

    match process_manual_entry(backend.get_ref(), form).await {
        Ok(receipt) => receipt_page(
            &tera,
            &flash_messages,
            "manual",
            "Manual entry saved.",
            &receipt,
        ),
        Err(err) => {
            log::error!("Failed to save manual entry: {err}");
            FlashMessage::error("Error saving manual entry.").send();
            redirect("/upload")
        }
    }
}
