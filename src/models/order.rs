use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::client::Client;
use crate::domain::order::{
    DEFAULT_ORDER_MESSAGE_SENDER, NewOrderMessage, Order as DomainOrder,
    OrderMessage as DomainOrderMessage, OrderTask as DomainOrderTask,
};
use crate::domain::types::{OrderId, Timestamp, lenient_timestamp};
use crate::models::parse_total;

#[derive(Debug, Clone, Deserialize)]
/// Backend model for the client embedded in an order.
pub struct OrderClient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::order::Order`].
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date_completed: Option<Timestamp>,
    #[serde(default)]
    pub client: Option<OrderClient>,
    pub status: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::order::OrderTask`].
pub struct OrderTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub for_client: bool,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub completed_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub due_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
/// Backend model for [`crate::domain::order::OrderMessage`].
pub struct OrderMessage {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub user: Option<Value>,
}

#[derive(Debug, Serialize)]
/// Request body for `POST /api/orders/{id}/messages`.
pub struct OrderMessageCreate<'a> {
    pub message: &'a str,
    pub is_public: bool,
}

impl From<Order> for DomainOrder {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            number: order.number,
            status: order.status,
            client: order.client.map(|client| Client {
                id: client.id,
                name: client.name,
                email: client.email,
                phone: client.phone,
                address: None,
            }),
            service: order.service,
            tasks: Vec::new(),
            messages: Vec::new(),
            total: order.price.as_deref().and_then(parse_total),
            notes: order.note,
            created_at: order.created_at,
            updated_at: order.updated_at,
            completed_at: order.date_completed,
        }
    }
}

impl From<OrderTask> for DomainOrderTask {
    fn from(task: OrderTask) -> Self {
        Self {
            id: task.id,
            title: task.name,
            description: task.description,
            status: if task.is_complete {
                "completed".to_string()
            } else {
                "pending".to_string()
            },
            is_public: task.is_public,
            for_client: task.for_client,
            completed_at: task.completed_at,
            due_date: task.due_at,
            sort_order: task.sort_order,
        }
    }
}

/// Name of the author of an order message, when the backend embeds one.
fn sender_name(user: Option<&Value>) -> String {
    match user.and_then(|u| u.as_object()).and_then(|u| u.get("name")) {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Null) | None => DEFAULT_ORDER_MESSAGE_SENDER.to_string(),
        Some(other) => other.to_string(),
    }
}

impl From<OrderMessage> for DomainOrderMessage {
    fn from(message: OrderMessage) -> Self {
        Self {
            sender: sender_name(message.user.as_ref()),
            id: message.id,
            content: message.message,
            created_at: message.created_at,
            is_internal: !message.is_public,
        }
    }
}

impl<'a> From<&'a NewOrderMessage> for OrderMessageCreate<'a> {
    fn from(message: &'a NewOrderMessage) -> Self {
        Self {
            message: &message.content,
            is_public: message.is_public,
        }
    }
}
