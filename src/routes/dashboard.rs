use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::InMemoryRepository;
use crate::routes::{base_context, local_now, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/")]
pub async fn show_dashboard(
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dashboard_service::load_dashboard(repo.get_ref(), local_now()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "dashboard");
            context.insert("stats", &data.stats);
            context.insert("alerts_feed", &data.alerts);
            context.insert("upcoming_bookings", &data.upcoming_bookings);

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
