use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::list::{ListQuery, ListQueryForm};
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, render_template};
use crate::services::conversations as conversations_service;

#[get("/conversations")]
pub async fn show_conversations(
    params: web::Query<ListQueryForm>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::from(params.into_inner());

    match conversations_service::load_conversations_page(
        repo.get_ref(),
        &query,
        server_config.items_per_page,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "conversations");
            context.insert("conversations", &data.conversations);
            context.insert("filters", &data.filters);

            render_template(&tera, "conversations/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list conversations: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
