use crate::{
    domain::{
        order::{NewOrderMessage, Order, OrderMessage, OrderTask},
        types::OrderId,
    },
    models::{
        ListResponse,
        order::{
            Order as ApiOrder, OrderMessage as ApiOrderMessage, OrderMessageCreate,
            OrderTask as ApiOrderTask,
        },
    },
    repository::{ApiRepository, OrderReader, OrderWriter, errors::RepositoryResult},
};

impl OrderReader for ApiRepository {
    async fn list_orders(&self) -> RepositoryResult<Vec<Order>> {
        let orders: ListResponse<ApiOrder> = self.get("/api/orders").await?;
        Ok(orders.into_items().into_iter().map(Into::into).collect())
    }

    async fn get_order_by_id(&self, id: &OrderId) -> RepositoryResult<Order> {
        let order: ApiOrder = self.get(&format!("/api/orders/{id}")).await?;
        Ok(order.into())
    }

    async fn list_order_tasks(&self, id: &OrderId) -> RepositoryResult<Vec<OrderTask>> {
        let tasks: ListResponse<ApiOrderTask> =
            self.get(&format!("/api/orders/{id}/tasks")).await?;
        Ok(tasks.into_items().into_iter().map(Into::into).collect())
    }

    async fn list_order_messages(&self, id: &OrderId) -> RepositoryResult<Vec<OrderMessage>> {
        let messages: ListResponse<ApiOrderMessage> =
            self.get(&format!("/api/orders/{id}/messages")).await?;
        Ok(messages.into_items().into_iter().map(Into::into).collect())
    }
}

impl OrderWriter for ApiRepository {
    async fn create_order_message(
        &self,
        id: &OrderId,
        message: &NewOrderMessage,
    ) -> RepositoryResult<OrderMessage> {
        let body = OrderMessageCreate::from(message);
        let created: ApiOrderMessage = self
            .post(&format!("/api/orders/{id}/messages"), &body)
            .await?;
        Ok(created.into())
    }
}
