//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{ProductError, ProductResult};
use kernel::id::ProductId;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, image, price, quantity, created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, image, price, quantity, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn find_by_ids(&self, ids: &[ProductId]) -> ProductResult<Vec<Product>> {
        let ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, image, price, quantity, created_at
            FROM products
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, image, price, quantity, created_at
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn create(&self, product: NewProduct) -> ProductResult<Product> {
        let result = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO products (name, description, image, price, quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await;

        let (id, created_at) = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(ProductError::NameTaken(product.name));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(product.into_product(ProductId::new(id), created_at))
    }

    async fn decrement_stock(&self, id: ProductId, amount: i32) -> ProductResult<Option<i32>> {
        ensure_positive(id, amount)?;

        let remaining = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE products
            SET quantity = quantity - $2
            WHERE id = $1 AND quantity >= $2
            RETURNING quantity
            "#,
        )
        .bind(id.value())
        .bind(amount)
        .fetch_optional(&self.pool)
        .await?;

        match remaining {
            Some(quantity) => {
                tracing::debug!(product_id = %id, amount, quantity, "Decremented stock");
            }
            None => {
                tracing::info!(product_id = %id, amount, "Stock decrement refused");
            }
        }

        Ok(remaining)
    }

    async fn restock(&self, id: ProductId, amount: i32) -> ProductResult<()> {
        ensure_positive(id, amount)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET quantity = quantity + $2
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .bind(amount)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::debug!(product_id = %id, amount, "Restocked product");

        Ok(())
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

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    image: String,
    price: Decimal,
    quantity: i32,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            image: self.image,
            price: self.price,
            quantity: self.quantity,
            created_at: self.created_at,
        }
    }
}
