//! Domain Value Objects

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use kernel::id::ProductId;

/// One cart line: a product and how many units of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product_id: ProductId, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Order lifecycle status; new orders start as `Pending`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("completed")]
    Completed,
    #[display("cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}
