use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::list::{ListQuery, ListQueryForm};
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::bookings as bookings_service;

#[get("/bookings")]
pub async fn show_bookings(
    params: web::Query<ListQueryForm>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::from(params.into_inner());

    match bookings_service::load_bookings_page(
        repo.get_ref(),
        &query,
        server_config.items_per_page,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "bookings");
            context.insert("bookings", &data.bookings);
            context.insert("filters", &data.filters);

            render_template(&tera, "bookings/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list bookings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/bookings/export")]
pub async fn export_bookings(
    params: web::Query<ListQueryForm>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    let query = ListQuery::from(params.into_inner());

    match bookings_service::export_bookings_csv(repo.get_ref(), &query) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"bookings.csv\"",
            ))
            .body(csv),
        Err(err) => {
            log::error!("Failed to export bookings: {err}");
            FlashMessage::error("Export failed.").send();
            redirect("/bookings")
        }
    }
}
