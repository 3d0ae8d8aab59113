use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Utc;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::ApiRepository;
use crate::routes::{ErrorView, base_context, redirect, render_service_error, render_template};
use crate::services::project::{load_project, load_projects};

#[get("/projects")]
pub async fn show_projects(
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = load_projects(repo.get_ref()).await;

    let mut context = base_context(&flash_messages, &server_config, "projects");
    context.insert("projects", &page.projects);

    render_template(&tera, "projects/index.html", &context)
}

#[get("/projects/{project_id}")]
pub async fn show_project(
    project_id: web::Path<String>,
    repo: web::Data<ApiRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let project_id = project_id.into_inner();
    let mut context = base_context(&flash_messages, &server_config, "projects");

    match load_project(repo.get_ref(), &project_id, Utc::now()).await {
        Ok(page) => {
            context.insert("page", &page);
            render_template(&tera, "projects/show.html", &context)
        }
        Err(err) => render_service_error(
            &tera,
            context,
            err,
            ErrorView {
                not_found_title: "Project not found",
                unavailable_title: "Unable to load project",
                retry_href: &format!("/projects/{project_id}"),
            },
        ),
    }
}

/// Phase guidance links here; project tasks live on the shared tasks page.
#[get("/projects/{project_id}/tasks")]
pub async fn project_tasks(_project_id: web::Path<String>) -> impl Responder {
    redirect("/tasks")
}
