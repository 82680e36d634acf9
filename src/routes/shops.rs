use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::list::{ListQuery, ListQueryForm};
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, local_now, redirect, render_template};
use crate::services::{ServiceError, shops as shops_service};

#[get("/shops")]
pub async fn show_shops(
    params: web::Query<ListQueryForm>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::from(params.into_inner());

    match shops_service::load_shops_page(repo.get_ref(), &query, server_config.items_per_page) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "shops");
            context.insert("shops", &data.shops);
            context.insert("filters", &data.filters);

            render_template(&tera, "shops/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list shops: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/shops/{shop_id}")]
pub async fn show_shop(
    shop_id: web::Path<i32>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match shops_service::load_shop_page(repo.get_ref(), shop_id.into_inner(), local_now()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "shops");
            context.insert("shop", &data.shop);
            context.insert("upcoming_bookings", &data.upcoming_bookings);
            context.insert("recent_conversations", &data.recent_conversations);
            context.insert("total_bookings", &data.total_bookings);
            context.insert("total_conversations", &data.total_conversations);
            context.insert("can_call", &data.can_call);

            render_template(&tera, "shops/show.html", &context)
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Shop not found.").send();
            redirect("/shops")
        }
        Err(err) => {
            log::error!("Failed to load shop: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
