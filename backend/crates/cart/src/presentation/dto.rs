//! Data Transfer Objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::checkout::{CheckoutInput, CheckoutOutput};
use crate::domain::value_objects::CartItem;
use kernel::id::{OrderId, ProductId};

/// One line of a checkout request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// POST /cart/checkout request body
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartItemRequest>,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<CheckoutRequest> for CheckoutInput {
    fn from(req: CheckoutRequest) -> Self {
        Self {
            items: req
                .items
                .into_iter()
                .map(|i| CartItem::new(i.product_id, i.quantity))
                .collect(),
            address: req.address,
        }
    }
}

/// POST /cart/checkout response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: OrderId,
    pub total_price: Decimal,
}

impl From<CheckoutOutput> for CheckoutResponse {
    fn from(out: CheckoutOutput) -> Self {
        Self {
            order_id: out.order_id,
            total_price: out.total_price,
        }
    }
}
