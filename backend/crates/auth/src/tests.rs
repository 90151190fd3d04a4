//! Unit tests for Auth crate

#[cfg(test)]
mod token_tests {
    use std::time::Duration;

    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};

    use crate::application::token::*;
    use crate::error::AuthError;
    use kernel::id::UserId;

    const SECRET: &[u8] = b"test-secret-for-session-tokens";

    #[test]
    fn test_round_trip_preserves_user_id() {
        for uid in [0_i64, 1, 42, i64::MAX] {
            let token = issue_token(SECRET, UserId::new(uid), Duration::from_secs(3600)).unwrap();
            let claims = validate_token(&token, SECRET).unwrap();
            assert_eq!(claims.user_id().unwrap(), UserId::new(uid));
        }
    }

    #[test]
    fn test_claims_shape() {
        let token = issue_token_at(SECRET, UserId::new(7), Duration::from_secs(60), 1_000).unwrap();
        let claims = validate_token_at(&token, SECRET, 1_000).unwrap();

        assert_eq!(claims.user_id, "7");
        assert_eq!(claims.expired_at, 1_060);

        let payload = token.split('.').nth(1).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();
        assert_eq!(json["userId"], "7");
        assert_eq!(json["expiredAt"], 1_060);
    }

    #[test]
    fn test_expired_token() {
        let token = issue_token_at(SECRET, UserId::new(1), Duration::from_secs(60), 1_000).unwrap();

        assert!(validate_token_at(&token, SECRET, 1_059).is_ok());
        assert!(matches!(
            validate_token_at(&token, SECRET, 1_060),
            Err(AuthError::ExpiredToken)
        ));
        assert!(matches!(
            validate_token_at(&token, SECRET, 5_000),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let token = issue_token(SECRET, UserId::new(1), Duration::ZERO).unwrap();
        assert!(matches!(
            validate_token(&token, SECRET),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_different_secret_is_signature_mismatch() {
        let token = issue_token(SECRET, UserId::new(1), Duration::from_secs(60)).unwrap();
        assert!(matches!(
            validate_token(&token, b"another-secret"),
            Err(AuthError::SignatureMismatch)
        ));
    }

    #[test]
    fn test_malformed_token() {
        for raw in ["", "garbage", "a.b", "a.b.c", "...."] {
            assert!(
                matches!(validate_token(raw, SECRET), Err(AuthError::InvalidToken)),
                "{raw:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_alg_none_rejected() {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(r#"{"userId":"1","expiredAt":9999999999}"#);
        let token = format!("{header}.{payload}.");

        assert!(matches!(
            validate_token(&token, SECRET),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_other_hmac_algorithms_accepted() {
        let claims = SessionClaims {
            user_id: "9".to_string(),
            expired_at: i64::MAX,
        };

        for alg in [Algorithm::HS384, Algorithm::HS512] {
            let token =
                jsonwebtoken::encode(&Header::new(alg), &claims, &EncodingKey::from_secret(SECRET))
                    .unwrap();
            let decoded = validate_token(&token, SECRET).unwrap();
            assert_eq!(decoded, claims);
        }
    }

    #[test]
    fn test_non_numeric_user_id_is_invalid() {
        let claims = SessionClaims {
            user_id: "not-a-number".to_string(),
            expired_at: i64::MAX,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let decoded = validate_token(&token, SECRET).unwrap();
        assert!(matches!(decoded.user_id(), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_missing_claims_is_invalid() {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "1" }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            validate_token(&token, SECRET),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_empty_secret_cannot_sign() {
        assert!(matches!(
            issue_token(b"", UserId::new(1), Duration::from_secs(60)),
            Err(AuthError::Signing(_))
        ));
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenService;
    use crate::application::*;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::Email;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn setup() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>, Arc<TokenService>) {
        let config = Arc::new(AuthConfig::with_random_secret());
        let tokens = Arc::new(TokenService::new(config.clone()));
        (Arc::new(InMemoryUserRepository::new()), config, tokens)
    }

    fn register_input(email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (users, config, tokens) = setup();

        let user = RegisterUseCase::new(users.clone(), config.clone())
            .execute(register_input("Ada@Example.com", "analytical"))
            .await
            .unwrap();
        assert_eq!(user.email.as_str(), "ada@example.com");

        let output = LoginUseCase::new(users.clone(), tokens.clone(), config.clone())
            .execute(LoginInput {
                email: "ada@example.com".to_string(),
                password: "analytical".to_string(),
            })
            .await
            .unwrap();

        let claims = tokens.validate(&output.token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (users, config, _) = setup();
        let use_case = RegisterUseCase::new(users.clone(), config);

        use_case
            .execute(register_input("ada@example.com", "analytical"))
            .await
            .unwrap();
        let err = use_case
            .execute(register_input("ADA@example.com", "another"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken(_)));
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let (users, config, _) = setup();
        let use_case = RegisterUseCase::new(users.clone(), config);

        for input in [
            register_input("not-an-email", "analytical"),
            register_input("ada@example.com", "ab"),
            register_input("ada@example.com", &"x".repeat(131)),
            RegisterInput {
                first_name: " ".to_string(),
                ..register_input("ada@example.com", "analytical")
            },
        ] {
            assert!(matches!(
                use_case.execute(input).await,
                Err(AuthError::Validation(_))
            ));
        }
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let (users, config, _) = setup();
        RegisterUseCase::new(users.clone(), config)
            .execute(register_input("ada@example.com", "analytical"))
            .await
            .unwrap();

        let stored = users
            .find_by_email(&Email::new("ada@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.password.as_phc_string().starts_with("$argon2id$"));
        assert!(!stored.password.as_phc_string().contains("analytical"));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (users, config, tokens) = setup();
        RegisterUseCase::new(users.clone(), config.clone())
            .execute(register_input("ada@example.com", "analytical"))
            .await
            .unwrap();

        let login = LoginUseCase::new(users, tokens, config);

        let wrong_password = login
            .execute(LoginInput {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = login
            .execute(LoginInput {
                email: "bob@example.com".to_string(),
                password: "analytical".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let (users, _, tokens) = setup();
        let token = tokens.issue(kernel::id::UserId::new(404)).unwrap();

        let err = AuthenticateUseCase::new(users, tokens)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
        assert!(err.is_authentication_failure());
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::application::token::{TokenService, issue_token};
    use crate::domain::entity::user::NewUser;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{Email, PersonName};
    use crate::infra::memory::InMemoryUserRepository;
    use crate::presentation::dto::LoginResponse;
    use crate::presentation::handlers::AuthAppState;
    use crate::presentation::middleware::{AuthenticatedUser, require_jwt};
    use crate::presentation::router::auth_router_generic;
    use kernel::id::UserId;
    use platform::password::ClearTextPassword;

    async fn whoami(user: AuthenticatedUser) -> String {
        user.user_id.to_string()
    }

    struct Harness {
        app: Router,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
        user_id: UserId,
    }

    async fn harness() -> Harness {
        let users = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::new(
            b"middleware-test-secret".to_vec(),
            Duration::from_secs(3600),
        ));

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

        let state = AuthAppState::new(users.clone(), config.clone());
        let tokens = state.tokens.clone();

        let protected = Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn_with_state(
                state.jwt_state(),
                require_jwt::<InMemoryUserRepository>,
            ));

        let app = Router::new()
            .merge(auth_router_generic(users, config.clone()))
            .merge(protected)
            .route("/unguarded", get(whoami));

        Harness {
            app,
            tokens,
            config,
            user_id: user.id,
        }
    }

    fn get_with_auth(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let h = harness().await;
        let token = h.tokens.issue(h.user_id).unwrap();

        let resp = h
            .app
            .clone()
            .oneshot(get_with_auth("/whoami", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, h.user_id.to_string());

        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_is_forbidden() {
        let h = harness().await;

        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(body_string(resp).await.contains("permission denied"));
    }

    #[tokio::test]
    async fn test_malformed_token_is_forbidden() {
        let h = harness().await;

        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", Some("not.a.token")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_foreign_secret_is_forbidden() {
        let h = harness().await;
        let token = issue_token(b"someone-else", h.user_id, Duration::from_secs(60)).unwrap();

        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_user_is_forbidden() {
        let h = harness().await;
        let token = h.tokens.issue(UserId::new(9_999)).unwrap();

        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_expired_token_is_forbidden() {
        let h = harness().await;
        let token = issue_token(&h.config.jwt_secret, h.user_id, Duration::ZERO).unwrap();

        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", Some(&token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_is_forbidden() {
        let h = harness().await;

        let resp = h
            .app
            .oneshot(get_with_auth("/unguarded", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_register_and_login_over_http() {
        let h = harness().await;

        let resp = h
            .app
            .clone()
            .oneshot(post_json(
                "/register",
                serde_json::json!({
                    "firstName": "Grace",
                    "lastName": "Hopper",
                    "email": "grace@example.com",
                    "password": "cobol-rules",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = h
            .app
            .clone()
            .oneshot(post_json(
                "/login",
                serde_json::json!({ "email": "grace@example.com", "password": "cobol-rules" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let login: LoginResponse = serde_json::from_str(&body_string(resp).await).unwrap();
        let resp = h
            .app
            .oneshot(get_with_auth("/whoami", Some(&login.token)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_duplicate_over_http() {
        let h = harness().await;

        let resp = h
            .app
            .oneshot(post_json(
                "/register",
                serde_json::json!({
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                    "password": "analytical",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_login_wrong_password_over_http() {
        let h = harness().await;

        let resp = h
            .app
            .oneshot(post_json(
                "/login",
                serde_json::json!({ "email": "ada@example.com", "password": "wrong" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
