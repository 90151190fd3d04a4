//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::AuthenticatedUser;
use kernel::id::ProductId;

use crate::application::{CreateProductUseCase, GetProductsUseCase};
use crate::domain::repository::ProductRepository;
use crate::error::ProductResult;
use crate::presentation::dto::{CreateProductRequest, ProductResponse};

/// Shared state for product handlers
pub struct ProductAppState<P>
where
    P: ProductRepository + Send + Sync + 'static,
{
    pub repo: Arc<P>,
}

impl<P> Clone for ProductAppState<P>
where
    P: ProductRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /api/v1/products
pub async fn list_products<P>(
    State(state): State<ProductAppState<P>>,
) -> ProductResult<Json<Vec<ProductResponse>>>
where
    P: ProductRepository + Send + Sync + 'static,
{
    let products = GetProductsUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /api/v1/products/{id}
pub async fn get_product<P>(
    State(state): State<ProductAppState<P>>,
    Path(id): Path<ProductId>,
) -> ProductResult<Json<ProductResponse>>
where
    P: ProductRepository + Send + Sync + 'static,
{
    let product = GetProductsUseCase::new(state.repo.clone()).get(id).await?;

    Ok(Json(product.into()))
}

/// POST /api/v1/products (requires JWT)
pub async fn create_product<P>(
    State(state): State<ProductAppState<P>>,
    user: AuthenticatedUser,
    Json(req): Json<CreateProductRequest>,
) -> ProductResult<(StatusCode, Json<ProductResponse>)>
where
    P: ProductRepository + Send + Sync + 'static,
{
    let product = CreateProductUseCase::new(state.repo.clone())
        .execute(req.into(), user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}
