//! Domain Services
//!
//! Pure checkout rules over a point-in-time product snapshot.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::value_objects::CartItem;
use crate::error::{CartError, CartResult};
use kernel::id::ProductId;
use product::Product;

/// Product snapshot keyed by id
pub type ProductIndex = HashMap<ProductId, Product>;

/// Reject non-positive quantities and return the distinct product ids,
/// in order of first appearance
pub fn collect_product_ids(items: &[CartItem]) -> CartResult<Vec<ProductId>> {
    let mut ids = Vec::with_capacity(items.len());

    for item in items {
        if item.quantity <= 0 {
            return Err(CartError::InvalidQuantity {
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }
        if !ids.contains(&item.product_id) {
            ids.push(item.product_id);
        }
    }

    Ok(ids)
}

pub fn index_products(products: impl IntoIterator<Item = Product>) -> ProductIndex {
    products.into_iter().map(|p| (p.id, p)).collect()
}

/// Requested units per product, summed over repeated lines, in order of
/// first appearance
pub fn requested_quantities(items: &[CartItem]) -> Vec<(ProductId, i64)> {
    let mut totals: Vec<(ProductId, i64)> = Vec::new();

    for item in items {
        match totals.iter_mut().find(|(id, _)| *id == item.product_id) {
            Some((_, sum)) => *sum += i64::from(item.quantity),
            None => totals.push((item.product_id, i64::from(item.quantity))),
        }
    }

    totals
}

/// Check every line against the snapshot
///
/// Fails on the first unknown product or the first product whose summed
/// request exceeds its stock.
pub fn check_stock(items: &[CartItem], products: &ProductIndex) -> CartResult<()> {
    if items.is_empty() {
        return Err(CartError::EmptyCart);
    }

    for (product_id, requested) in requested_quantities(items) {
        let product = products
            .get(&product_id)
            .ok_or(CartError::ProductUnavailable(product_id))?;

        if !product.has_stock(requested) {
            return Err(CartError::InsufficientStock {
                product_id,
                requested,
                available: product.quantity,
            });
        }
    }

    Ok(())
}

/// Integer digits an order total may carry (`NUMERIC(12, 2)`)
pub const ORDER_TOTAL_MAX_INTEGER_DIGITS: u32 = 10;

/// Smallest total that no longer fits the order total column
pub fn order_total_limit() -> Decimal {
    Decimal::from(10_i64.pow(ORDER_TOTAL_MAX_INTEGER_DIGITS))
}

/// Sum of quantity x unit price over all lines
///
/// Fails with `TotalTooLarge` when the sum does not fit an order total.
pub fn calculate_total(items: &[CartItem], products: &ProductIndex) -> CartResult<Decimal> {
    let limit = order_total_limit();

    items.iter().try_fold(Decimal::ZERO, |total, item| {
        let product = products
            .get(&item.product_id)
            .ok_or(CartError::ProductUnavailable(item.product_id))?;

        product
            .price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|line| total.checked_add(line))
            .filter(|sum| *sum < limit)
            .ok_or(CartError::TotalTooLarge { limit })
    })
}
