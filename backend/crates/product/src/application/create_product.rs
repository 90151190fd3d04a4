//! Create Product Use Case
//!
//! Adds a product to the catalog. Names are unique.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};
use kernel::id::UserId;

pub struct CreateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> CreateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// Create a product on behalf of `created_by`
    pub async fn execute(&self, input: NewProduct, created_by: UserId) -> ProductResult<Product> {
        let input = input.validated()?;

        if self.product_repo.find_by_name(&input.name).await?.is_some() {
            return Err(ProductError::NameTaken(input.name));
        }

        let product = self.product_repo.create(input).await?;

        tracing::info!(
            product_id = %product.id,
            name = %product.name,
            created_by = %created_by,
            "Product created"
        );

        Ok(product)
    }
}
