use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;

use crate::forms::message::MessageForm;
use crate::models::config::ServerConfig;
use crate::repository::ApiRepository;
use crate::routes::{ErrorView, base_context, redirect, render_service_error, render_template};
use crate::services::ServiceError;
use crate::services::conversation::{
    load_conversation, load_conversations, send_conversation_message,
};

#[get("/conversations")]
pub async fn show_conversations(
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = load_conversations(repo.get_ref(), Utc::now()).await;

    let mut context = base_context(&flash_messages, &server_config, "conversations");
    context.insert("conversations", &page.conversations);

    render_template(&tera, "conversations/index.html", &context)
}

#[get("/conversations/{conversation_id}")]
pub async fn show_conversation(
    conversation_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let conversation_id = conversation_id.into_inner();
    let mut context = base_context(&flash_messages, &server_config, "conversations");

    match load_conversation(repo.get_ref(), &conversation_id, Utc::now()).await {
        Ok(page) => {
            context.insert("page", &page);
            render_template(&tera, "conversations/show.html", &context)
        }
        Err(err) => render_service_error(
            &tera,
            context,
            err,
            ErrorView {
                not_found_title: "Conversation not found",
                unavailable_title: "Unable to load conversation",
                retry_href: &format!("/conversations/{conversation_id}"),
            },
        ),
    }
}

#[post("/conversations/{conversation_id}/messages")]
pub async fn post_conversation_message(
    conversation_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    web::Form(form): web::Form<MessageForm>,
) -> impl Responder {
    let conversation_id = conversation_id.into_inner();

    match send_conversation_message(repo.get_ref(), &conversation_id, form).await {
        Ok(()) => FlashMessage::success("Message sent.").send(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Conversation not found.").send();
            return redirect("/conversations");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(ServiceError::Api(message)) => {
            FlashMessage::error(format!("Failed to send message: {message}")).send()
        }
    }

    redirect(&format!("/conversations/{conversation_id}"))
}
