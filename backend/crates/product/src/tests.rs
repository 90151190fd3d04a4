//! Unit tests for Product crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use crate::application::{CreateProductUseCase, GetProductsUseCase};
    use crate::domain::entities::{NewProduct, Product};
    use crate::domain::repository::ProductRepository;
    use crate::error::ProductError;
    use crate::infra::memory::InMemoryProductRepository;
    use kernel::id::{ProductId, UserId};

    fn product(id: i64, name: &str, quantity: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            price: Decimal::from(10),
            quantity,
            created_at: Utc::now(),
        }
    }

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: "A thing".to_string(),
            image: "thing.png".to_string(),
            price: Decimal::new(1250, 2),
            quantity: 3,
        }
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = Arc::new(InMemoryProductRepository::with_products([
            product(3, "c", 1),
            product(1, "a", 1),
            product(2, "b", 1),
        ]));

        let ids: Vec<i64> = GetProductsUseCase::new(repo)
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let repo = Arc::new(InMemoryProductRepository::new());

        let err = GetProductsUseCase::new(repo)
            .get(ProductId::new(7))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(id) if id == ProductId::new(7)));
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = Arc::new(InMemoryProductRepository::with_products([product(4, "old", 1)]));

        let created = CreateProductUseCase::new(repo.clone())
            .execute(new_product("new"), UserId::new(1))
            .await
            .unwrap();

        assert_eq!(created.id, ProductId::new(5));
        assert_eq!(created.price, Decimal::new(1250, 2));
        assert_eq!(repo.quantity_of(created.id), Some(3));
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let use_case = CreateProductUseCase::new(repo.clone());

        use_case
            .execute(new_product("Lamp"), UserId::new(1))
            .await
            .unwrap();
        let err = use_case
            .execute(new_product("  Lamp  "), UserId::new(1))
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NameTaken(name) if name == "Lamp"));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_unknown() {
        let repo = InMemoryProductRepository::with_products([product(1, "a", 1), product(2, "b", 1)]);

        let found = repo
            .find_by_ids(&[ProductId::new(2), ProductId::new(99)])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId::new(2));
    }

    #[tokio::test]
    async fn test_decrement_stock_is_conditional() {
        let repo = InMemoryProductRepository::with_products([product(1, "a", 5)]);
        let id = ProductId::new(1);

        assert_eq!(repo.decrement_stock(id, 3).await.unwrap(), Some(2));
        assert_eq!(repo.decrement_stock(id, 3).await.unwrap(), None);
        assert_eq!(repo.quantity_of(id), Some(2));

        assert_eq!(repo.decrement_stock(id, 2).await.unwrap(), Some(0));
        assert_eq!(repo.decrement_stock(ProductId::new(99), 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stock_changes_must_be_positive() {
        let repo = InMemoryProductRepository::with_products([product(1, "a", 5)]);
        let id = ProductId::new(1);

        for amount in [0, -3] {
            assert!(matches!(
                repo.decrement_stock(id, amount).await,
                Err(ProductError::Validation(_))
            ));
            assert!(matches!(
                repo.restock(id, amount).await,
                Err(ProductError::Validation(_))
            ));
        }
        assert_eq!(repo.quantity_of(id), Some(5));
    }

    #[tokio::test]
    async fn test_restock() {
        let repo = InMemoryProductRepository::with_products([product(1, "a", 0)]);

        repo.restock(ProductId::new(1), 4).await.unwrap();
        assert_eq!(repo.quantity_of(ProductId::new(1)), Some(4));

        assert!(matches!(
            repo.restock(ProductId::new(2), 1).await,
            Err(ProductError::NotFound(_))
        ));
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use auth::domain::entity::user::NewUser;
    use auth::domain::repository::UserRepository;
    use auth::domain::value_object::{Email, PersonName};
    use auth::{AuthAppState, AuthConfig, InMemoryUserRepository};
    use platform::password::ClearTextPassword;

    use crate::domain::entities::Product;
    use crate::infra::memory::InMemoryProductRepository;
    use crate::presentation::dto::ProductResponse;
    use crate::presentation::router::product_router_generic;
    use kernel::id::ProductId;

    struct Harness {
        app: Router,
        token: String,
    }

    async fn harness() -> Harness {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = users
            .create(NewUser {
                first_name: PersonName::new("Ada", "firstName").unwrap(),
                last_name: PersonName::new("Lovelace", "lastName").unwrap(),
                email: Email::new("ada@example.com").unwrap(),
                password: ClearTextPassword::new("analytical".to_string())
                    .unwrap()
                    .hash(None)
                    .unwrap(),
            })
            .await
            .unwrap();

        let config = Arc::new(AuthConfig::new(
            b"product-test-secret".to_vec(),
            Duration::from_secs(3600),
        ));
        let auth_state = AuthAppState::new(users, config);
        let token = auth_state.tokens.issue(user.id).unwrap();

        let products = Arc::new(InMemoryProductRepository::with_products([Product {
            id: ProductId::new(1),
            name: "Guitar".to_string(),
            description: "Six strings".to_string(),
            image: "guitar.png".to_string(),
            price: Decimal::new(1999, 2),
            quantity: 5,
            created_at: Utc::now(),
        }]));

        Harness {
            app: product_router_generic(products, auth_state.jwt_state()),
            token,
        }
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn create(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/products")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn lamp() -> serde_json::Value {
        serde_json::json!({
            "name": "Lamp",
            "description": "Bright",
            "image": "lamp.png",
            "price": 12.5,
            "quantity": 3,
        })
    }

    #[tokio::test]
    async fn test_list_products() {
        let h = harness().await;

        let resp = h.app.oneshot(get("/products")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["name"], "Guitar");
        assert_eq!(body[0]["price"], 19.99);
        assert!(body[0].get("createdAt").is_some());
    }

    #[tokio::test]
    async fn test_get_product() {
        let h = harness().await;

        let resp = h.app.clone().oneshot(get("/products/1")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let product: ProductResponse = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(product.quantity, 5);

        let resp = h.app.oneshot(get("/products/42")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_product_bad_id() {
        let h = harness().await;

        let resp = h.app.oneshot(get("/products/abc")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_requires_token() {
        let h = harness().await;

        let resp = h.app.clone().oneshot(create(None, lamp())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = h.app.oneshot(get("/products")).await.unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_product() {
        let h = harness().await;

        let resp = h
            .app
            .clone()
            .oneshot(create(Some(&h.token), lamp()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = body_json(resp).await;
        assert_eq!(body["id"], 2);
        assert_eq!(body["name"], "Lamp");

        let resp = h
            .app
            .oneshot(create(Some(&h.token), lamp()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_invalid_product() {
        let h = harness().await;

        for price in [serde_json::json!(0), serde_json::json!(12.345), serde_json::json!(100_000_000.0)] {
            let mut body = lamp();
            body["price"] = price.clone();

            let resp = h
                .app
                .clone()
                .oneshot(create(Some(&h.token), body))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "price {price}");
        }

        let resp = h.app.oneshot(get("/products")).await.unwrap();
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
    }
}
