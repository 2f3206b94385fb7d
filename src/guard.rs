//! Routing guard: per-request locale interception.
//!
//! Wraps the whole router. Each inbound request is resolved exactly once;
//! the guard either emits a temporary redirect to the locale-prefixed path
//! or forwards the request unchanged to the inner service.

use axum::{
    extract::{Request, State},
    http::header::ACCEPT_LANGUAGE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::handlers::AppState;
use crate::i18n::RouteAction;

/// Axum middleware applying the locale resolver to every request.
///
/// Stateless per request: the resolver is pure and the guard performs no
/// retries or suspension beyond awaiting the inner service.
pub async fn locale_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let resolution = state.resolver.resolve(&path, accept_language);
    match resolution.action {
        RouteAction::Redirect(target) => {
            debug!(
                "Redirecting '{}' to '{}' (locale {})",
                path, target, resolution.locale
            );
            Redirect::temporary(&target).into_response()
        }
        RouteAction::PassThrough => next.run(request).await,
    }
}
