use actix_web::{Responder, get};

use crate::routes::redirect;

/// The upload page is the portal's landing view.
#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/upload")
}
