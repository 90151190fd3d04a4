//! Get Products Use Case
//!
//! Public catalog reads.

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};
use kernel::id::ProductId;

pub struct GetProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> GetProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        self.product_repo.list().await
    }

    pub async fn get(&self, id: ProductId) -> ProductResult<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}
