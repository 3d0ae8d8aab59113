use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::ApiRepository;
use crate::routes::{ErrorView, base_context, redirect, render_service_error, render_template};
use crate::services::ServiceError;
use crate::services::proposal::{load_proposal, load_proposals, request_signature};

#[get("/proposals")]
pub async fn show_proposals(
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = load_proposals(repo.get_ref()).await;

    let mut context = base_context(&flash_messages, &server_config, "proposals");
    context.insert("proposals", &page.proposals);

    render_template(&tera, "proposals/index.html", &context)
}

#[get("/proposals/{proposal_id}")]
pub async fn show_proposal(
    proposal_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let proposal_id = proposal_id.into_inner();
    let mut context = base_context(&flash_messages, &server_config, "proposals");

    match load_proposal(repo.get_ref(), &proposal_id).await {
        Ok(page) => {
            context.insert("page", &page);
            render_template(&tera, "proposals/show.html", &context)
        }
        Err(err) => render_service_error(
            &tera,
            context,
            err,
            ErrorView {
                not_found_title: "Proposal not found",
                unavailable_title: "Unable to load proposal",
                retry_href: &format!("/proposals/{proposal_id}"),
            },
        ),
    }
}

#[post("/proposals/{proposal_id}/sign")]
pub async fn sign_proposal(
    proposal_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
) -> impl Responder {
    let proposal_id = proposal_id.into_inner();

    match request_signature(repo.get_ref(), &proposal_id).await {
        Ok(()) => FlashMessage::success(
            "Signature request received. Your team will follow up with the signing documents.",
        )
        .send(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Proposal not found.").send();
            return redirect("/proposals");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(ServiceError::Api(message)) => {
            FlashMessage::error(format!("Failed to request signature: {message}")).send()
        }
    }

    redirect(&format!("/proposals/{proposal_id}"))
}
