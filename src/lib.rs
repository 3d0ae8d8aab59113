#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod formatting;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use std::time::Duration;

    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::models::config::ServerConfig;
    use crate::repository::ApiRepository;
    use crate::routes::conversations::{
        post_conversation_message, show_conversation, show_conversations,
    };
    use crate::routes::dashboard::show_dashboard;
    use crate::routes::engagements::show_engagement;
    use crate::routes::inbox::show_inbox;
    use crate::routes::not_found;
    use crate::routes::orders::{post_order_message, show_order, show_order_task, show_orders};
    use crate::routes::pages::{show_billing, show_help, show_messages, show_settings, show_tasks};
    use crate::routes::projects::{project_tasks, show_project, show_projects};
    use crate::routes::proposals::{show_proposal, show_proposals, sign_proposal};

    /// Registers every portal route.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(show_dashboard)
            .service(show_projects)
            .service(show_project)
            .service(project_tasks)
            .service(show_engagement)
            .service(show_inbox)
            .service(show_conversations)
            .service(show_conversation)
            .service(post_conversation_message)
            .service(show_orders)
            .service(show_order)
            .service(post_order_message)
            .service(show_order_task)
            .service(show_proposals)
            .service(show_proposal)
            .service(sign_proposal)
            .service(show_settings)
            .service(show_help)
            .service(show_billing)
            .service(show_tasks)
            .service(show_messages);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = ApiRepository::new(
            &server_config.api_url,
            server_config.api_token.clone(),
            Duration::from_secs(server_config.request_timeout_secs),
        )
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;

        if server_config
            .api_token
            .as_deref()
            .is_none_or(|token| token.trim().is_empty())
        {
            log::warn!("No API token configured, every backend call will be rejected");
        }

        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid cookie secret: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving {} on {}:{} against {}",
            server_config.brand_name,
            bind_address.0,
            bind_address.1,
            server_config.api_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .default_service(web::to(not_found))
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
