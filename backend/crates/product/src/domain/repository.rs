//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{NewProduct, Product};
use crate::error::ProductResult;
use kernel::id::ProductId;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products, ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// Find every product whose id is in `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[ProductId]) -> ProductResult<Vec<Product>>;

    /// Find product by exact name
    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>>;

    /// Insert a new product; a duplicate name fails with `NameTaken`
    async fn create(&self, product: NewProduct) -> ProductResult<Product>;

    /// Take `amount` units out of stock in a single conditional write
    ///
    /// Returns the remaining stock, or `None` when the product is gone or
    /// holds fewer than `amount` units. Nothing is written in that case.
    async fn decrement_stock(&self, id: ProductId, amount: i32) -> ProductResult<Option<i32>>;

    /// Put `amount` units back into stock; an unknown id fails with `NotFound`
    async fn restock(&self, id: ProductId, amount: i32) -> ProductResult<()>;
}
