//! Domain Entities

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{ProductError, ProductResult};
use kernel::id::ProductId;

/// Maximum product name length (in characters)
pub const PRODUCT_NAME_MAX_LENGTH: usize = 255;

/// Decimal places a price may carry (`NUMERIC(10, 2)`)
pub const PRICE_MAX_SCALE: u32 = 2;

/// Integer digits a price may carry (`NUMERIC(10, 2)`)
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 8;

/// Smallest price that no longer fits the price column
pub fn price_limit() -> Decimal {
    Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS))
}

/// Catalog product with its current stock
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Image URL
    pub image: String,
    /// Unit price
    pub price: Decimal,
    /// Units in stock, never negative
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether `requested` units can be taken from stock
    pub fn has_stock(&self, requested: i64) -> bool {
        requested <= i64::from(self.quantity)
    }

    /// Take `amount` units out of stock
    pub fn remove_stock(&mut self, amount: i32) -> ProductResult<()> {
        if amount < 0 || amount > self.quantity {
            return Err(ProductError::Validation(format!(
                "cannot remove {} units from product {} with {} in stock",
                amount, self.id, self.quantity
            )));
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Put `amount` units back into stock
    pub fn add_stock(&mut self, amount: i32) -> ProductResult<()> {
        let quantity = self.quantity.checked_add(amount).filter(|_| amount >= 0);
        match quantity {
            Some(quantity) => {
                self.quantity = quantity;
                Ok(())
            }
            None => Err(ProductError::Validation(format!(
                "cannot add {} units to product {} with {} in stock",
                amount, self.id, self.quantity
            ))),
        }
    }
}

/// A product about to be inserted; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl NewProduct {
    /// Trim text fields and check the catalog rules
    pub fn validated(self) -> ProductResult<Self> {
        let name = self.name.trim().to_string();

        if name.is_empty() {
            return Err(ProductError::Validation("name cannot be empty".to_string()));
        }
        if name.chars().count() > PRODUCT_NAME_MAX_LENGTH {
            return Err(ProductError::Validation(format!(
                "name must be at most {PRODUCT_NAME_MAX_LENGTH} characters"
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(ProductError::Validation("price must be positive".to_string()));
        }
        if self.price.normalize().scale() > PRICE_MAX_SCALE {
            return Err(ProductError::Validation(format!(
                "price must have at most {PRICE_MAX_SCALE} decimal places"
            )));
        }
        if self.price >= price_limit() {
            return Err(ProductError::Validation(format!(
                "price must be below {}",
                price_limit()
            )));
        }
        if self.quantity < 0 {
            return Err(ProductError::Validation(
                "quantity cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            name,
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            ..self
        })
    }

    /// Attach store-assigned fields
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            quantity: self.quantity,
            created_at,
        }
    }
}
