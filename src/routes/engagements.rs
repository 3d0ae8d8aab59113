use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Utc;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::ApiRepository;
use crate::routes::{ErrorView, base_context, render_service_error, render_template};
use crate::services::engagement::load_engagement;

#[get("/engagements/{engagement_id}")]
pub async fn show_engagement(
    engagement_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let engagement_id = engagement_id.into_inner();
    let mut context = base_context(&flash_messages, &server_config, "dashboard");

    match load_engagement(repo.get_ref(), &engagement_id, Utc::now()).await {
        Ok(page) => {
            context.insert("page", &page);
            render_template(&tera, "engagements/show.html", &context)
        }
        Err(err) => render_service_error(
            &tera,
            context,
            err,
            ErrorView {
                not_found_title: "Engagement not found",
                unavailable_title: "Unable to load engagement",
                retry_href: &format!("/engagements/{engagement_id}"),
            },
        ),
    }
}
