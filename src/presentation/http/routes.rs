// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, publications, users},
    middleware::require_auth,
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[HeaderValue]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let public = Router::new()
        .route("/health", get(health))
        .route("/api/v1/login", post(auth::login))
        .route("/api/v1/users", post(users::register))
        .route("/api/v1/publications/{id}/like", post(publications::like))
        .route("/api/v1/publications/{id}/unlike", post(publications::unlike));

    let protected = Router::new()
        .route("/api/v1/users", get(users::search_users))
        .route(
            "/api/v1/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/v1/users/{id}/password", post(users::change_password))
        .route(
            "/api/v1/users/{id}/follow",
            post(users::follow).delete(users::unfollow),
        )
        .route("/api/v1/users/{id}/followers", get(users::list_followers))
        .route("/api/v1/users/{id}/following", get(users::list_following))
        .route(
            "/api/v1/users/{id}/publications",
            get(users::list_publications),
        )
        .route(
            "/api/v1/publications",
            get(publications::feed).post(publications::create_publication),
        )
        .route(
            "/api/v1/publications/{id}",
            get(publications::get_publication)
                .put(publications::update_publication)
                .delete(publications::delete_publication),
        )
        .route_layer(middleware::from_fn(require_auth));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
