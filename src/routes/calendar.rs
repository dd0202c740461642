use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::rest::RestBackend;
use crate::dto::calendar::CalendarQuery;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::calendar::load_calendar_page;

#[get("/calendar")]
pub async fn show_calendar(
    params: web::Query<CalendarQuery>,
    backend: web::Data<RestBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match load_calendar_page(backend.get_ref(), params.into_inner()).await {
        Ok(page) => page,
        Err(ServiceError::DayGrid(err)) => {
            FlashMessage::warning(format!("Invalid calendar period: {err}")).send();
            return redirect("/calendar");
        }
        Err(err) => {
            log::error!("Failed to load calendar page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "calendar");
    context.insert("page", &page);

    render_template(&tera, "calendar/index.html", &context)
}
