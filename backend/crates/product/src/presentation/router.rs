//! Product Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use auth::{JwtAuthState, PgUserRepository, require_jwt};
use auth::domain::repository::UserRepository;

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, ProductAppState};

/// Create the Product router with PostgreSQL repositories
pub fn product_router(
    repo: Arc<PgProductRepository>,
    jwt: JwtAuthState<PgUserRepository>,
) -> Router {
    product_router_generic(repo, jwt)
}

/// Create a generic Product router for any repository implementation
///
/// `POST /products` sits behind [`require_jwt`]; reads are public.
pub fn product_router_generic<P, U>(repo: Arc<P>, jwt: JwtAuthState<U>) -> Router
where
    P: ProductRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = ProductAppState { repo };

    Router::new()
        .route(
            "/products",
            get(handlers::list_products::<P>).merge(
                post(handlers::create_product::<P>)
                    .route_layer(from_fn_with_state(jwt, require_jwt::<U>)),
            ),
        )
        .route("/products/{id}", get(handlers::get_product::<P>))
        .with_state(state)
}
