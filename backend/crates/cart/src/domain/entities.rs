//! Domain Entities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::value_objects::OrderStatus;
use kernel::id::{OrderId, OrderItemId, ProductId, UserId};

/// Stored order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Sum of quantity x unit price over the order's items
    pub total: Decimal,
    pub status: OrderStatus,
    /// Shipping address
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Order about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total: Decimal,
    pub status: OrderStatus,
    pub address: String,
}

/// Stored order line
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    /// Unit price at the time of purchase
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Order line about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: Decimal,
}
