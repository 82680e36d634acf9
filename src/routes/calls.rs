use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::call::{CallQueryForm, started_param};
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, local_now, redirect, render_template};
use crate::services::{ServiceError, calls as calls_service};

#[post("/shops/{shop_id}/call")]
pub async fn start_call(
    shop_id: web::Path<i32>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    let shop_id = shop_id.into_inner();

    match calls_service::start_call(repo.get_ref(), shop_id, local_now()) {
        Ok(session) => {
            FlashMessage::info("Call started.").send();
            match session.started_at {
                Some(at) => redirect(&format!(
                    "/shops/{shop_id}/call?started={}",
                    started_param(at)
                )),
                None => redirect(&format!("/shops/{shop_id}/call")),
            }
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Shop not found.").send();
            redirect("/shops")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::warning(message).send();
            redirect(&format!("/shops/{shop_id}"))
        }
        Err(err) => {
            log::error!("Failed to start call: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/shops/{shop_id}/call")]
pub async fn show_call(
    shop_id: web::Path<i32>,
    params: web::Query<CallQueryForm>,
    repo: web::Data<InMemoryRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let now = local_now();
    let timings = server_config.call.timings();

    match calls_service::load_call_page(
        repo.get_ref(),
        shop_id.into_inner(),
        params.started_at(now, timings.total()),
        now,
        &timings,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "shops");
            context.insert("call", &data);

            render_template(&tera, "calls/show.html", &context)
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Shop not found.").send();
            redirect("/shops")
        }
        Err(err) => {
            log::error!("Failed to load call: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
