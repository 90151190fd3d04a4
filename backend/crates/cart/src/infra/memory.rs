//! In-Memory Repository Implementation
//!
//! Backs tests and database-less local runs.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::entities::{NewOrder, NewOrderItem, Order, OrderItem};
use crate::domain::repository::OrderRepository;
use crate::error::{CartError, CartResult};
use kernel::id::{OrderId, OrderItemId};

#[derive(Default)]
struct OrderTables {
    next_order_id: i64,
    next_item_id: i64,
    orders: Vec<Order>,
    items: Vec<OrderItem>,
}

/// In-memory order repository
#[derive(Default)]
pub struct InMemoryOrderRepository {
    tables: Mutex<OrderTables>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored orders
    pub fn orders(&self) -> Vec<Order> {
        self.lock().map(|t| t.orders.clone()).unwrap_or_default()
    }

    /// Snapshot of stored order items
    pub fn items(&self) -> Vec<OrderItem> {
        self.lock().map(|t| t.items.clone()).unwrap_or_default()
    }

    fn lock(&self) -> CartResult<MutexGuard<'_, OrderTables>> {
        self.tables
            .lock()
            .map_err(|_| CartError::Internal("order tables lock poisoned".to_string()))
    }
}

impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, order: &NewOrder) -> CartResult<OrderId> {
        let mut tables = self.lock()?;

        tables.next_order_id += 1;
        let id = OrderId::new(tables.next_order_id);
        tables.orders.push(Order {
            id,
            user_id: order.user_id,
            total: order.total,
            status: order.status,
            address: order.address.clone(),
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn create_order_item(&self, item: &NewOrderItem) -> CartResult<OrderItemId> {
        let mut tables = self.lock()?;

        // Mirrors the order_items.order_id foreign key
        if !tables.orders.iter().any(|o| o.id == item.order_id) {
            return Err(CartError::OrderPersistence(format!(
                "order {} does not exist",
                item.order_id
            )));
        }

        tables.next_item_id += 1;
        let id = OrderItemId::new(tables.next_item_id);
        tables.items.push(OrderItem {
            id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
            created_at: Utc::now(),
        });

        Ok(id)
    }
}
