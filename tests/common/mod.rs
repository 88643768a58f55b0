#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

use shopapi::app::{AppState, build_router};
use shopapi::auth::{ROLE_ADMIN, ROLE_USER};
use shopapi::config::AppConfig;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub admin_token: String,
    pub user_token: String,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expiration_hours: 1,
        jwt_remember_me_hours: 24,
        bcrypt_cost: 4,
        cors_origins: "*".to_string(),
        application_name: "shopapiApp".to_string(),
        run_migrations: true,
    }
}

/// Fresh application backed by its own migrated in-memory database.
pub async fn spawn_app() -> TestApp {
    let config = test_config();

    // Every pooled connection would open a separate in-memory database
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None).await.expect("failed to run migrations");

    let state = AppState::new(db, &config).expect("invalid test configuration");
    let router = build_router(state.clone(), &config);

    let admin_token = state
        .jwt_service
        .generate_token(
            "admin",
            &[ROLE_ADMIN.to_string(), ROLE_USER.to_string()],
            false,
        )
        .expect("failed to sign admin token");
    let user_token = state
        .jwt_service
        .generate_token("user", &[ROLE_USER.to_string()], false)
        .expect("failed to sign user token");

    TestApp {
        router,
        state,
        admin_token,
        user_token,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router failed to respond");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, Some(&self.admin_token), None)
            .await
    }
}
