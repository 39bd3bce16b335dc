// src/presentation/http/controllers/publications.rs
use crate::application::{
    commands::publications::{
        CreatePublicationCommand, DeletePublicationCommand, LikePublicationCommand,
        UnlikePublicationCommand, UpdatePublicationCommand,
    },
    dto::PublicationDto,
    queries::publications::GetPublicationQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PublicationRequest {
    pub title: String,
    pub content: String,
}

pub async fn create_publication(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<PublicationRequest>,
) -> HttpResult<(StatusCode, Json<PublicationDto>)> {
    let command = CreatePublicationCommand {
        title: payload.title,
        content: payload.content,
    };

    let publication = state
        .services
        .publication_commands
        .create_publication(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(publication)))
}

pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<PublicationDto>>> {
    state
        .services
        .publication_queries
        .build_feed(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_publication(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<PublicationDto>> {
    state
        .services
        .publication_queries
        .get_publication(GetPublicationQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_publication(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<PublicationRequest>,
) -> HttpResult<StatusCode> {
    let command = UpdatePublicationCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .publication_commands
        .update_publication(&user, command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_publication(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .publication_commands
        .delete_publication(&user, DeletePublicationCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

/// Open to anonymous callers.
pub async fn like(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .publication_commands
        .like(LikePublicationCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn unlike(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .publication_commands
        .unlike(UnlikePublicationCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
