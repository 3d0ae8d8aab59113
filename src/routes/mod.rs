//! HTTP handlers and the helpers they share for rendering and redirects.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::services::ServiceError;

pub mod conversations;
pub mod dashboard;
pub mod engagements;
pub mod inbox;
pub mod orders;
pub mod pages;
pub mod projects;
pub mod proposals;

/// Maps a flash message level to the CSS alert class used by templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, StatusCode::OK, template, context)
}

pub fn render_with_status(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    context: &Context,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context every page starts from: flash alerts, branding and the active
/// navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("brand_name", &server_config.brand_name);
    context.insert("support_email", &server_config.support_email);
    context.insert("current_page", current_page);
    context
}

/// How a page reports its failures.
pub struct ErrorView<'a> {
    /// Heading of the not-found page, e.g. `Order not found`.
    pub not_found_title: &'a str,
    /// Heading of the retry page, e.g. `Unable to load order`.
    pub unavailable_title: &'a str,
    /// Where the retry button points.
    pub retry_href: &'a str,
}

pub fn render_not_found(tera: &Tera, mut context: Context, title: &str) -> HttpResponse {
    context.insert("title", title);
    render_with_status(tera, StatusCode::NOT_FOUND, "errors/not_found.html", &context)
}

pub fn render_unavailable(
    tera: &Tera,
    mut context: Context,
    title: &str,
    message: &str,
    retry_href: &str,
) -> HttpResponse {
    context.insert("title", title);
    context.insert("message", message);
    context.insert("retry_href", retry_href);
    render_with_status(
        tera,
        StatusCode::BAD_GATEWAY,
        "errors/unavailable.html",
        &context,
    )
}

/// Turns a failed page load into the not-found or retry page.
pub fn render_service_error(
    tera: &Tera,
    context: Context,
    err: ServiceError,
    view: ErrorView<'_>,
) -> HttpResponse {
    match err {
        ServiceError::NotFound => render_not_found(tera, context, view.not_found_title),
        ServiceError::Api(message) | ServiceError::Form(message) => render_unavailable(
            tera,
            context,
            view.unavailable_title,
            &message,
            view.retry_href,
        ),
    }
}

/// Fallback for paths no route matches.
pub async fn not_found(
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let context = base_context(&flash_messages, &server_config, "");
    render_not_found(&tera, context, "Page not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_sets_location() {
        let response = redirect("/orders/o1");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/orders/o1"
        );
    }

    #[test]
    fn broken_template_is_a_server_error() {
        let mut tera = Tera::default();
        tera.add_raw_template("broken.html", "{{ missing.field }}")
            .unwrap();
        let response = render_template(&tera, "broken.html", &Context::new());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn service_errors_pick_the_matching_page() {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("errors/not_found.html", "{{ title }}"),
            ("errors/unavailable.html", "{{ title }}: {{ message }}"),
        ])
        .unwrap();
        let view = || ErrorView {
            not_found_title: "Order not found",
            unavailable_title: "Unable to load order",
            retry_href: "/orders/o1",
        };

        let missing = render_service_error(&tera, Context::new(), ServiceError::NotFound, view());
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let failed = render_service_error(
            &tera,
            Context::new(),
            ServiceError::Api("Upstream timeout".into()),
            view(),
        );
        assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
    }
}
