//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entities::{NewOrder, NewOrderItem};
use crate::domain::repository::OrderRepository;
use crate::error::CartResult;
use kernel::id::{OrderId, OrderItemId};

/// PostgreSQL-backed order repository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for PgOrderRepository {
    async fn create_order(&self, order: &NewOrder) -> CartResult<OrderId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (user_id, total, status, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(order.user_id.value())
        .bind(order.total)
        .bind(order.status.as_str())
        .bind(&order.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(OrderId::new(id))
    }

    async fn create_order_item(&self, item: &NewOrderItem) -> CartResult<OrderItemId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(item.order_id.value())
        .bind(item.product_id.value())
        .bind(item.quantity)
        .bind(item.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(OrderItemId::new(id))
    }
}
