//! Shared helpers for integration tests: a fake backend API on an ephemeral
//! port and the portal configuration pointing at it.
#![allow(dead_code, unused_macros)]

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, Route, web};
use serde_json::Value;

use service_portal::models::config::ServerConfig;
use service_portal::repository::ApiRepository;

pub const TOKEN: &str = "test-token";

/// Bodies received by POST routes of the fake backend, keyed by path.
pub type Received = Arc<Mutex<Vec<(String, Value)>>>;

/// Starts a fake backend in its own thread and returns its base URL.
pub fn spawn_backend<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let system = actix_web::rt::System::new();
        system.block_on(async move {
            let server = HttpServer::new(move || App::new().configure(configure.clone()))
                .workers(1)
                .disable_signals()
                .bind(("127.0.0.1", 0))
                .expect("bind fake backend");
            tx.send(server.addrs()[0]).expect("send backend address");
            server.run().await.expect("run fake backend");
        });
    });

    let addr = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("fake backend did not start");
    format!("http://{addr}")
}

/// GET route answering with a fixed status and JSON body.
pub fn reply(status: StatusCode, body: Value) -> Route {
    web::get().to(move || {
        let body = body.clone();
        async move { HttpResponse::build(status).json(body) }
    })
}

/// GET route answering `200 OK` with `body`.
pub fn ok(body: Value) -> Route {
    reply(StatusCode::OK, body)
}

/// POST route recording the JSON body and answering with `response`.
pub fn record(path: &'static str, received: Received, response: Value) -> Route {
    web::post().to(move |body: web::Json<Value>| {
        let received = received.clone();
        let response = response.clone();
        async move {
            received
                .lock()
                .unwrap()
                .push((path.to_string(), body.into_inner()));
            HttpResponse::Created().json(response)
        }
    })
}

pub fn repository(api_url: &str) -> ApiRepository {
    ApiRepository::new(api_url, Some(TOKEN.to_string()), Duration::from_secs(5)).unwrap()
}

pub fn server_config(api_url: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".into(),
        port: 0,
        templates_dir: "templates/**/*".into(),
        secret: "x".repeat(64),
        api_url: api_url.into(),
        api_token: Some(TOKEN.into()),
        request_timeout_secs: 5,
        brand_name: "Acme Portal".into(),
        support_email: "help@acme.test".into(),
    }
}

/// Builds the portal `App` against the given backend URL.
macro_rules! portal_app {
    ($api_url:expr) => {{
        let config = common::server_config($api_url);
        let key = actix_web::cookie::Key::from(config.secret.as_bytes());
        let store = actix_web_flash_messages::storage::CookieMessageStore::builder(key).build();
        let flash = actix_web_flash_messages::FlashMessagesFramework::builder(store).build();
        let tera = tera::Tera::new(&config.templates_dir).unwrap();

        actix_web::App::new()
            .wrap(flash)
            .configure(service_portal::configure)
            .default_service(actix_web::web::to(service_portal::routes::not_found))
            .app_data(actix_web::web::Data::new(tera))
            .app_data(actix_web::web::Data::new(common::repository($api_url)))
            .app_data(actix_web::web::Data::new(config))
    }};
}

pub fn timestamp() -> &'static str {
    "2024-05-01T10:00:00Z"
}

pub fn order_json(id: &str, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "number": "1042",
        "created_at": timestamp(),
        "client": {"id": "cl-1", "name": "Ada Lovelace", "email": "ada@example.com"},
        "status": status,
        "price": "1250.00",
        "service": "Data cleaning",
        "note": null
    })
}

pub fn message_json(id: &str, conversation_id: &str, content: &str, internal: bool) -> Value {
    serde_json::json!({
        "id": id,
        "conversation_id": conversation_id,
        "sender_id": "u-1",
        "sender": {"id": "u-1", "name": "Grace", "type": "staff"},
        "content": content,
        "is_internal": internal,
        "created_at": timestamp(),
        "updated_at": timestamp()
    })
}

pub fn conversation_json(id: &str, messages: Option<Vec<Value>>) -> Value {
    serde_json::json!({
        "id": id,
        "project_id": "p1",
        "subject": "Kickoff",
        "status": "open",
        "project": {"id": "p1", "name": "Website"},
        "messages": messages,
        "message_count": 2,
        "created_at": timestamp(),
        "updated_at": timestamp(),
        "last_message_at": timestamp()
    })
}

pub fn proposal_json(id: &str, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "client_email": "ada@example.com",
        "client_name": "Ada Lovelace",
        "status": status,
        "total": "200.00",
        "created_at": timestamp(),
        "items": [
            {"id": "i1", "name": "Audit", "quantity": 2, "price": "100.00", "total": "200.00"}
        ]
    })
}
