//! Cart Router

use axum::{Router, middleware::from_fn_with_state, routing::post};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{JwtAuthState, PgUserRepository, require_jwt};
use product::{PgProductRepository, ProductRepository};

use crate::application::config::CheckoutConfig;
use crate::domain::repository::OrderRepository;
use crate::infra::postgres::PgOrderRepository;
use crate::presentation::handlers::{self, CartAppState};

/// Create the Cart router with PostgreSQL repositories
pub fn cart_router(
    products: Arc<PgProductRepository>,
    orders: Arc<PgOrderRepository>,
    config: Arc<CheckoutConfig>,
    jwt: JwtAuthState<PgUserRepository>,
) -> Router {
    cart_router_generic(products, orders, config, jwt)
}

/// Create a generic Cart router for any repository implementation
///
/// Every route sits behind [`require_jwt`].
pub fn cart_router_generic<P, O, U>(
    products: Arc<P>,
    orders: Arc<O>,
    config: Arc<CheckoutConfig>,
    jwt: JwtAuthState<U>,
) -> Router
where
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = CartAppState {
        products,
        orders,
        config,
    };

    Router::new()
        .route("/cart/checkout", post(handlers::checkout::<P, O>))
        .route_layer(from_fn_with_state(jwt, require_jwt::<U>))
        .with_state(state)
}
