// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{
        ChangePasswordCommand, DeleteUserCommand, FollowUserCommand, RegisterUserCommand,
        UnfollowUserCommand, UpdateUserCommand,
    },
    dto::{PublicationDto, UserDto},
    queries::{
        publications::ListAuthorPublicationsQuery,
        users::{GetUserQuery, ListFollowersQuery, ListFollowingQuery, SearchUsersQuery},
    },
};
use crate::presentation::http::controllers::user_requests::{
    ChangePasswordRequest, RegisterRequest, SearchUsersParams, UpdateUserRequest,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};

pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        name: payload.name,
        nick: payload.nick,
        email: payload.email,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn search_users(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<SearchUsersParams>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .search_users(SearchUsersQuery {
            name_or_nick: params.user,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdateUserCommand {
        user_id: id,
        name: payload.name,
        nick: payload.nick,
        email: payload.email,
    };

    state
        .services
        .user_commands
        .update_user(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(&user, DeleteUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<ChangePasswordRequest>,
) -> HttpResult<StatusCode> {
    let command = ChangePasswordCommand {
        user_id: id,
        current_password: payload.current,
        new_password: payload.new,
    };

    state
        .services
        .user_commands
        .change_password(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .follow(&user, FollowUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .unfollow(&user, UnfollowUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_followers(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_followers(ListFollowersQuery { user_id: id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_following(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_following(ListFollowingQuery { user_id: id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_publications(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<Vec<PublicationDto>>> {
    state
        .services
        .publication_queries
        .list_by_author(ListAuthorPublicationsQuery { author_id: id })
        .await
        .into_http()
        .map(Json)
}
