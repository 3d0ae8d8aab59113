use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;

use crate::forms::message::MessageForm;
use crate::models::config::ServerConfig;
use crate::repository::ApiRepository;
use crate::routes::{ErrorView, base_context, redirect, render_service_error, render_template};
use crate::services::ServiceError;
use crate::services::order::{load_order, load_orders, send_order_message};

#[get("/orders")]
pub async fn show_orders(
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = load_orders(repo.get_ref()).await;

    let mut context = base_context(&flash_messages, &server_config, "orders");
    context.insert("orders", &page.orders);

    render_template(&tera, "orders/index.html", &context)
}

#[get("/orders/{order_id}")]
pub async fn show_order(
    order_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let order_id = order_id.into_inner();
    let mut context = base_context(&flash_messages, &server_config, "orders");

    match load_order(repo.get_ref(), &order_id, Utc::now()).await {
        Ok(page) => {
            context.insert("page", &page);
            render_template(&tera, "orders/show.html", &context)
        }
        Err(err) => render_service_error(
            &tera,
            context,
            err,
            ErrorView {
                not_found_title: "Order not found",
                unavailable_title: "Unable to load order",
                retry_href: &format!("/orders/{order_id}"),
            },
        ),
    }
}

#[post("/orders/{order_id}/messages")]
pub async fn post_order_message(
    order_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    web::Form(form): web::Form<MessageForm>,
) -> impl Responder {
    let order_id = order_id.into_inner();

    match send_order_message(repo.get_ref(), &order_id, form).await {
        Ok(()) => FlashMessage::success("Message sent.").send(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Order not found.").send();
            return redirect("/orders");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(ServiceError::Api(message)) => {
            FlashMessage::error(format!("Failed to send message: {message}")).send()
        }
    }

    redirect(&format!("/orders/{order_id}#messages"))
}

/// Task call-to-action links land on the task within the order page.
#[get("/orders/{order_id}/tasks/{task_id}")]
pub async fn show_order_task(path: web::Path<(String, String)>) -> impl Responder {
    let (order_id, task_id) = path.into_inner();
    redirect(&format!("/orders/{order_id}#task-{task_id}"))
}
