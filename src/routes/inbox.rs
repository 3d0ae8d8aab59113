use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Utc;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::ApiRepository;
use crate::routes::{base_context, render_template};
use crate::services::inbox::load_inbox;

#[get("/inbox")]
pub async fn show_inbox(
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = load_inbox(repo.get_ref(), Utc::now()).await;

    let mut context = base_context(&flash_messages, &server_config, "inbox");
    context.insert("messages", &page.messages);

    render_template(&tera, "inbox/index.html", &context)
}
