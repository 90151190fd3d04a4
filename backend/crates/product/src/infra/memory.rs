//! In-Memory Repository Implementation
//!
//! Backs tests and database-less local runs.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};
use kernel::id::ProductId;

#[derive(Default)]
struct ProductTable {
    next_id: i64,
    rows: Vec<Product>,
}

/// In-memory product repository
#[derive(Default)]
pub struct InMemoryProductRepository {
    table: Mutex<ProductTable>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `products` (ids kept as given)
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let repo = Self::new();
        if let Ok(mut table) = repo.table.lock() {
            for product in products {
                table.next_id = table.next_id.max(product.id.value());
                table.rows.push(product);
            }
        }
        repo
    }

    /// Current stock of a product, if it exists
    pub fn quantity_of(&self, id: ProductId) -> Option<i32> {
        let table = self.lock().ok()?;
        table.rows.iter().find(|p| p.id == id).map(|p| p.quantity)
    }

    fn lock(&self) -> ProductResult<MutexGuard<'_, ProductTable>> {
        self.table
            .lock()
            .map_err(|_| ProductError::Internal("product table lock poisoned".to_string()))
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let table = self.lock()?;
        let mut rows = table.rows.clone();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ProductId]) -> ProductResult<Vec<Product>> {
        let table = self.lock()?;
        let mut rows: Vec<Product> = table
            .rows
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        rows.sort_by_key(|p| p.id);
        Ok(rows)
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|p| p.name == name).cloned())
    }

    async fn create(&self, product: NewProduct) -> ProductResult<Product> {
        let mut table = self.lock()?;

        if table.rows.iter().any(|p| p.name == product.name) {
            return Err(ProductError::NameTaken(product.name));
        }

        table.next_id += 1;
        let product = product.into_product(ProductId::new(table.next_id), Utc::now());
        table.rows.push(product.clone());

        Ok(product)
    }

    async fn decrement_stock(&self, id: ProductId, amount: i32) -> ProductResult<Option<i32>> {
        ensure_positive(id, amount)?;
        let mut table = self.lock()?;

        let Some(row) = table.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if !row.has_stock(i64::from(amount)) {
            return Ok(None);
        }
        row.remove_stock(amount)?;

        Ok(Some(row.quantity))
    }

    async fn restock(&self, id: ProductId, amount: i32) -> ProductResult<()> {
        ensure_positive(id, amount)?;
        let mut table = self.lock()?;

        let row = table
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        row.add_stock(amount)
    }
}

fn ensure_positive(id: ProductId, amount: i32) -> ProductResult<()> {
    if amount <= 0 {
        return Err(ProductError::Validation(format!(
            "stock change for product {id} must be positive, got {amount}"
        )));
    }
    Ok(())
}
