//! Admin dashboard for restaurants answering reservation calls with an AI receptionist.
//!
//! The `data` feature exposes the framework-free layers: the filtered
//! collection, domain records, repositories and screen services. The
//! `server` feature adds the Actix-web front end.

#[cfg(feature = "data")]
pub mod collection;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::InMemoryRepository;
    use crate::routes::bookings::{export_bookings, show_bookings};
    use crate::routes::calls::{show_call, start_call};
    use crate::routes::conversations::show_conversations;
    use crate::routes::dashboard::show_dashboard;
    use crate::routes::shops::{show_shop, show_shops};
    use crate::routes::local_now;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = InMemoryRepository::seeded(local_now().date())
            .map_err(|e| std::io::Error::other(format!("Failed to seed demo data: {e}")))?;

        // Key and store for flash messages.
        let secret_key = Key::try_from(server_config.secret.as_bytes()).map_err(|e| {
            std::io::Error::other(format!("Secret must be at least 64 bytes long: {e}"))
        })?;

        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Starting dashboard on {}:{}",
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .service(show_dashboard)
                .service(show_shops)
                .service(show_shop)
                .service(start_call)
                .service(show_call)
                .service(show_bookings)
                .service(export_bookings)
                .service(show_conversations)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
