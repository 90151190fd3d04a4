//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use auth::AuthenticatedUser;
use product::ProductRepository;

use crate::application::CheckoutUseCase;
use crate::application::config::CheckoutConfig;
use crate::domain::repository::OrderRepository;
use crate::error::{CartError, CartResult};
use crate::presentation::dto::{CheckoutRequest, CheckoutResponse};

/// Shared state for cart handlers
pub struct CartAppState<P, O>
where
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
{
    pub products: Arc<P>,
    pub orders: Arc<O>,
    pub config: Arc<CheckoutConfig>,
}

impl<P, O> Clone for CartAppState<P, O>
where
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
            orders: self.orders.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /api/v1/cart/checkout (requires JWT)
pub async fn checkout<P, O>(
    State(state): State<CartAppState<P, O>>,
    user: AuthenticatedUser,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> CartResult<(StatusCode, Json<CheckoutResponse>)>
where
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| CartError::InvalidPayload(e.body_text()))?;

    let use_case = CheckoutUseCase::new(
        state.products.clone(),
        state.orders.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(user.user_id, req.into()).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}
