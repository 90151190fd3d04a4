//! Checkout Use Case
//!
//! Turns a cart into a stored order:
//!
//! 1. index the product snapshot by id
//! 2. check stock for the whole cart (no writes on failure)
//! 3. price the cart
//! 4. take stock with one conditional decrement per product
//! 5. store the order as `pending`
//! 6. store one order item per cart line at the snapshot unit price
//!
//! The snapshot may be stale by step 4. A decrement the store refuses
//! fails the checkout with `InsufficientStock`, and units already taken are
//! put back. A failed order write puts them back as well.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::config::CheckoutConfig;
use crate::domain::entities::{NewOrder, NewOrderItem};
use crate::domain::repository::OrderRepository;
use crate::domain::services::{
    ProductIndex, calculate_total, check_stock, collect_product_ids, index_products,
    requested_quantities,
};
use crate::domain::value_objects::{CartItem, OrderStatus};
use crate::error::{CartError, CartResult};
use kernel::id::{OrderId, ProductId, UserId};
use product::{Product, ProductRepository};

/// Checkout input
#[derive(Debug, Clone)]
pub struct CheckoutInput {
    pub items: Vec<CartItem>,
    /// Shipping address; the configured default is used when absent
    pub address: Option<String>,
}

/// Checkout output
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutput {
    pub order_id: OrderId,
    pub total_price: Decimal,
}

/// Checkout use case
pub struct CheckoutUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    product_repo: Arc<P>,
    order_repo: Arc<O>,
    config: Arc<CheckoutConfig>,
}

impl<P, O> CheckoutUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(product_repo: Arc<P>, order_repo: Arc<O>, config: Arc<CheckoutConfig>) -> Self {
        Self {
            product_repo,
            order_repo,
            config,
        }
    }

    /// Validate the cart, load its products and create the order
    pub async fn execute(&self, user_id: UserId, input: CheckoutInput) -> CartResult<CheckoutOutput> {
        let ids = collect_product_ids(&input.items)?;

        let products = if ids.is_empty() {
            Vec::new()
        } else {
            self.product_repo.find_by_ids(&ids).await?
        };

        let address = self.config.resolve_address(input.address.as_deref());

        self.create_order(products, &input.items, user_id, &address)
            .await
    }

    /// Create an order for `items` from an already-loaded product snapshot
    pub async fn create_order(
        &self,
        products: Vec<Product>,
        items: &[CartItem],
        user_id: UserId,
        address: &str,
    ) -> CartResult<CheckoutOutput> {
        let products = index_products(products);

        check_stock(items, &products)?;
        let total = calculate_total(items, &products)?;

        let taken = self.take_stock(items, &products).await?;

        let order_id = self
            .order_repo
            .create_order(&NewOrder {
                user_id,
                total,
                status: OrderStatus::Pending,
                address: address.to_string(),
            })
            .await
            .map_err(into_persistence_error);
        let order_id = match order_id {
            Ok(id) => id,
            Err(e) => {
                self.release_stock(&taken).await;
                return Err(e);
            }
        };

        for item in items {
            let price = products
                .get(&item.product_id)
                .map(|p| p.price)
                .ok_or(CartError::ProductUnavailable(item.product_id))?;

            self.order_repo
                .create_order_item(&NewOrderItem {
                    order_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price,
                })
                .await
                .map_err(into_persistence_error)?;
        }

        tracing::info!(
            order_id = %order_id,
            user_id = %user_id,
            total = %total,
            lines = items.len(),
            "Order created"
        );

        Ok(CheckoutOutput {
            order_id,
            total_price: total,
        })
    }

    /// Decrement stock for every requested product
    ///
    /// On failure the units taken so far are put back before returning.
    async fn take_stock(
        &self,
        items: &[CartItem],
        products: &ProductIndex,
    ) -> CartResult<Vec<(ProductId, i32)>> {
        let mut taken = Vec::new();

        for (product_id, requested) in requested_quantities(items) {
            match self.take_units(product_id, requested, products).await {
                Ok(amount) => taken.push((product_id, amount)),
                Err(e) => {
                    self.release_stock(&taken).await;
                    return Err(e);
                }
            }
        }

        Ok(taken)
    }

    async fn take_units(
        &self,
        product_id: ProductId,
        requested: i64,
        products: &ProductIndex,
    ) -> CartResult<i32> {
        let amount = i32::try_from(requested).map_err(|_| CartError::InsufficientStock {
            product_id,
            requested,
            available: products.get(&product_id).map_or(0, |p| p.quantity),
        })?;

        match self.product_repo.decrement_stock(product_id, amount).await? {
            Some(_) => Ok(amount),
            None => Err(self.refused_stock_error(product_id, requested).await),
        }
    }

    /// Error for a decrement the store refused, with the current stock
    async fn refused_stock_error(&self, product_id: ProductId, requested: i64) -> CartError {
        match self.product_repo.find_by_id(product_id).await {
            Ok(Some(product)) => CartError::InsufficientStock {
                product_id,
                requested,
                available: product.quantity,
            },
            Ok(None) => CartError::ProductUnavailable(product_id),
            Err(e) => e.into(),
        }
    }

    /// Put back units taken by [`Self::take_stock`]
    async fn release_stock(&self, taken: &[(ProductId, i32)]) {
        for (product_id, amount) in taken {
            if let Err(e) = self.product_repo.restock(*product_id, *amount).await {
                tracing::error!(
                    product_id = %product_id,
                    amount,
                    error = %e,
                    "Failed to put back stock after aborted checkout"
                );
            }
        }
    }
}

fn into_persistence_error(err: CartError) -> CartError {
    match err {
        CartError::OrderPersistence(_) => err,
        other => CartError::OrderPersistence(other.to_string()),
    }
}
