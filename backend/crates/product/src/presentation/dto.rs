//! Data Transfer Objects

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewProduct, Product};
use kernel::id::ProductId;

/// Product as returned by the catalog endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            image: p.image,
            price: p.price,
            quantity: p.quantity,
            created_at: p.created_at,
        }
    }
}

/// POST /products request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            image: req.image,
            price: req.price,
            quantity: req.quantity,
        }
    }
}
