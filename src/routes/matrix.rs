use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::rest::RestBackend;
use crate::dto::matrix::MatrixQuery;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::matrix::load_matrix_page;

#[get("/matrix")]
pub async fn show_matrix(
    params: web::Query<MatrixQuery>,
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match load_matrix_page(backend.get_ref(), params.into_inner()).await {
        Ok(page) => page,
        Err(ServiceError::DayGrid(err)) => {
            FlashMessage::warning(format!("Invalid matrix period: {err}")).send();
            return redirect("/matrix");
        }
        Err(err) => {
            log::error!("Failed to load matrix page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "matrix");
    context.insert("page", &page);

    render_template(&tera, "matrix/index.html", &context)
}
