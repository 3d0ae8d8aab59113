use chrono::{DateTime, Utc};
use futures::join;

use crate::domain::activity::{DEFAULT_ACTIVITY_LIMIT, activity_feed};
use crate::domain::client::display_name;
use crate::domain::order::{
    NewOrderMessage, Order, order_next_steps, order_progress, task_action,
};
use crate::domain::status::StatusBadge;
use crate::domain::types::OrderId;
use crate::dto::order::{
    ActivityRow, ClientInfo, OrderListPageData, OrderMessageView, OrderPageData, OrderRow,
    TaskRow,
};
use crate::formatting::{MISSING, format_currency, format_date, format_date_time, format_relative};
use crate::forms::message::MessageForm;
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult, or_empty};

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            reference: format!("#{}", order.reference()),
            service: order.service.clone().unwrap_or_else(|| MISSING.to_string()),
            status: StatusBadge::new(&order.status),
            created: format_date(order.created_at),
            total: format_currency(order.total),
        }
    }
}

/// Loads the orders table. A failed fetch shows the empty state.
pub async fn load_orders<R>(repo: &R) -> OrderListPageData
where
    R: OrderReader + ?Sized,
{
    let orders = or_empty(repo.list_orders().await, "orders");

    OrderListPageData {
        orders: orders.iter().map(OrderRow::from).collect(),
    }
}

/// Loads an order with its tasks and messages. Only the order itself is
/// required; tasks and messages fall back to whatever the order embeds.
pub async fn load_order<R>(
    repo: &R,
    order_id: &str,
    now: DateTime<Utc>,
) -> ServiceResult<OrderPageData>
where
    R: OrderReader + ?Sized,
{
    let id = OrderId::new(order_id)?;
    let (order, tasks, messages) = join!(
        repo.get_order_by_id(&id),
        repo.list_order_tasks(&id),
        repo.list_order_messages(&id),
    );
    let mut order = order?;

    let tasks = or_empty(tasks, "order tasks");
    if !tasks.is_empty() {
        order.tasks = tasks;
    }
    let messages = or_empty(messages, "order messages");
    if !messages.is_empty() {
        order.messages = messages;
    }
    order.tasks.sort_by_key(|t| t.sort_order);
    order.messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    Ok(order_page(&order, now))
}

fn order_page(order: &Order, now: DateTime<Utc>) -> OrderPageData {
    let client = order.client.as_ref();

    OrderPageData {
        id: order.id.to_string(),
        reference: order.reference(),
        status: StatusBadge::new(&order.status),
        service: order.service.clone(),
        created: format_date(order.created_at),
        completed: order.completed_at.map(|at| format_date(Some(at))),
        client: ClientInfo {
            name: display_name(client, None).to_string(),
            email: client.and_then(|c| c.email.clone()),
            phone: client.and_then(|c| c.phone.clone()),
            address: client.and_then(|c| c.address.clone()),
        },
        progress: order_progress(&order.status),
        next_steps: order_next_steps(&order.status),
        actions: order
            .pending_tasks()
            .map(|task| task_action(task, &order.id))
            .collect(),
        tasks: order
            .tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                status: StatusBadge::new(&task.status),
                completed: task.is_completed(),
                due: task.due_date.map(|at| format_date(Some(at))),
                completed_on: task.completed_at.map(|at| format_date(Some(at))),
            })
            .collect(),
        activity: activity_feed(&order.messages, &order.tasks, DEFAULT_ACTIVITY_LIMIT)
            .into_iter()
            .map(|item| ActivityRow {
                kind: item.kind,
                title: item.title,
                description: item.description,
                when: item
                    .timestamp
                    .map(|at| format_relative(at, now))
                    .unwrap_or_else(|| MISSING.to_string()),
            })
            .collect(),
        messages: order
            .public_messages()
            .map(|m| OrderMessageView {
                id: m.id.clone(),
                sender: m.sender.clone(),
                content: m.content.clone(),
                sent_at: format_date_time(m.created_at),
            })
            .collect(),
        total: format_currency(order.total),
        notes: order.notes.clone(),
    }
}

/// Posts a client-visible message on an order.
pub async fn send_order_message<R>(repo: &R, order_id: &str, form: MessageForm) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    let id = OrderId::new(order_id)?;
    let content = form.into_content().map_err(|err| {
        log::error!("Failed to validate message form: {err}");
        ServiceError::Form("Message cannot be empty".to_string())
    })?;

    repo.create_order_message(&id, &NewOrderMessage::public(content))
        .await
        .map_err(|err| {
            log::error!("Failed to send message on order {id}: {err}");
            err
        })?;

    Ok(())
}
