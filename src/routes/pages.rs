//! Pages with fixed copy and no backend data.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_template};

fn render_static(
    page: &str,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    let context = base_context(flash_messages, server_config, page);
    render_template(tera, &format!("pages/{page}.html"), &context)
}

#[get("/settings")]
pub async fn show_settings(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_static("settings", &flash_messages, &server_config, &tera)
}

#[get("/help")]
pub async fn show_help(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_static("help", &flash_messages, &server_config, &tera)
}

#[get("/billing")]
pub async fn show_billing(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_static("billing", &flash_messages, &server_config, &tera)
}

#[get("/tasks")]
pub async fn show_tasks(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_static("tasks", &flash_messages, &server_config, &tera)
}

#[get("/messages")]
pub async fn show_messages(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_static("messages", &flash_messages, &server_config, &tera)
}
