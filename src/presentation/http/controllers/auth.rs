// src/presentation/http/controllers/auth.rs
use crate::application::{commands::users::LoginUserCommand, dto::LoginResultDto};
use crate::presentation::http::controllers::user_requests::LoginRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<LoginResultDto>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}
