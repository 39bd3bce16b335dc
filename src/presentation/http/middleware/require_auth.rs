// src/presentation/http/middleware/require_auth.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Resolves the bearer token before any protected handler runs.
///
/// On success the `AuthenticatedUser` is stored in the request extensions
/// for the `Authenticated` extractor; on failure the request ends here
/// with 401.
///
/// Usage: `router.route_layer(axum::middleware::from_fn(require_auth))`
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Response {
    let Some(services) = req
        .extensions()
        .get::<HttpState>()
        .map(|state| std::sync::Arc::clone(&state.services))
    else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    match services.authenticate(header.token()) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
