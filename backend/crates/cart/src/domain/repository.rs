//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{NewOrder, NewOrderItem};
use crate::error::CartResult;
use kernel::id::{OrderId, OrderItemId};

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Insert an order and return its id
    async fn create_order(&self, order: &NewOrder) -> CartResult<OrderId>;

    /// Insert one line of an existing order
    async fn create_order_item(&self, item: &NewOrderItem) -> CartResult<OrderItemId>;
}
