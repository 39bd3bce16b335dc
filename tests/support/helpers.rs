// tests/support/helpers.rs
use super::mocks::{MutableClock, StrictPasswordHasher};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use chrono::Duration;
use feedline::application::{
    commands::users::RegisterUserCommand,
    dto::{AuthenticatedUser, UserDto},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use feedline::domain::user::UserId;
use feedline::infrastructure::{
    database,
    repositories::{
        SqlitePublicationReadRepository, SqlitePublicationWriteRepository,
        SqliteSocialGraphRepository, SqliteUserRepository,
    },
    security::token::HmacTokenManager,
};
use feedline::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tower::util::ServiceExt as _;

pub const TEST_SECRET: &[u8] = b"feedline-test-secret-0123456789abcdef";
pub const TEST_TTL_SECS: u64 = 3600;

/// In-memory SQLite with the schema applied. Every connection to
/// `sqlite::memory:` is a separate database, so the pool holds exactly one
/// connection and never recycles it.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("memory url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("connect sqlite memory");
    database::run_migrations(&pool).await.expect("run migrations");
    pool
}

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub pool: SqlitePool,
    pub clock: Arc<MutableClock>,
}

impl TestApp {
    /// A real HMAC token for `user_id`, signed with the app's secret.
    pub fn token_for(&self, user_id: i64) -> String {
        self.services
            .token_manager()
            .issue(UserId::new(user_id).expect("user id"))
            .expect("issue token")
            .token
    }

    pub async fn register(&self, nick: &str) -> UserDto {
        register_user(&self.services, nick).await
    }

    /// Sends one request through a clone of the router.
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        json: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match json {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("router is infallible")
    }
}

/// Full stack over an in-memory database: SQLite repositories, HMAC tokens,
/// a controllable clock and the plain-text password hasher.
pub async fn spawn_app() -> TestApp {
    let clock = Arc::new(MutableClock::new());
    let token_manager: Arc<dyn TokenManager> = Arc::new(
        HmacTokenManager::new(
            TEST_SECRET,
            StdDuration::from_secs(TEST_TTL_SECS),
            Arc::clone(&clock) as Arc<dyn Clock>,
        )
        .expect("token manager"),
    );
    spawn_app_with(token_manager, clock).await
}

pub async fn spawn_app_with(
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<MutableClock>,
) -> TestApp {
    let pool = memory_pool().await;
    let services = build_services(&pool, token_manager, Arc::clone(&clock) as Arc<dyn Clock>);
    let state = HttpState {
        services: Arc::clone(&services),
    };
    let router = build_router(state, &[]);

    TestApp {
        router,
        services,
        pool,
        clock,
    }
}

pub fn build_services(
    pool: &SqlitePool,
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    build_services_with_hasher(pool, Arc::new(StrictPasswordHasher), token_manager, clock)
}

pub fn build_services_with_hasher(
    pool: &SqlitePool,
    password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteSocialGraphRepository::new(pool.clone())),
        Arc::new(SqlitePublicationWriteRepository::new(pool.clone())),
        Arc::new(SqlitePublicationReadRepository::new(pool.clone())),
        password_hasher,
        token_manager,
        clock,
    ))
}

pub async fn register_user(services: &ApplicationServices, nick: &str) -> UserDto {
    services
        .user_commands
        .register(RegisterUserCommand {
            name: format!("User {nick}"),
            nick: nick.to_string(),
            email: format!("{nick}@example.com"),
            password: password_for(nick),
        })
        .await
        .expect("register user")
}

pub fn password_for(nick: &str) -> String {
    format!("{nick}-password")
}

/// The identity the auth middleware would hand to a handler.
pub fn actor(id: i64) -> AuthenticatedUser {
    let now = super::mocks::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("user id"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response carries `expected_status` and the `{"error": ...}`
/// payload. Returns the error message for further checks.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = read_json(resp).await;
    let message = json
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    assert!(!message.is_empty(), "expected non-empty error field, got {json}");
    message
}
