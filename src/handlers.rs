//! HTTP surface: router construction and request handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::centers::{distinct_provinces, Center, CenterFilter, CentersClient, TypeSelection};
use crate::config::Config;
use crate::guard;
use crate::i18n::{Locale, LocaleResolver};

/// Shared application state: dataset client plus the immutable resolver.
#[derive(Clone)]
pub struct AppState {
    pub centers: Arc<CentersClient>,
    pub resolver: Arc<LocaleResolver>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            centers: Arc::new(CentersClient::new(config.centers_base_url.clone())),
            resolver: Arc::new(LocaleResolver::new()),
        }
    }
}

/// Build the full application router with the routing guard applied.
///
/// The guard wraps every route; `/api/*` paths are on the resolver's
/// exclusion list, so API clients are never redirected.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/centers/:locale", get(list_centers))
        .fallback(localized_page)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::locale_guard,
        ))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Query parameters for the centers listing.
///
/// `province` takes a comma-separated list; `type` is one of
/// `all` / `direct` / `partner`; `q` is the free-text search.
#[derive(Debug, Default, Deserialize)]
pub struct CentersQuery {
    pub province: Option<String>,
    #[serde(rename = "type")]
    pub center_type: Option<String>,
    pub q: Option<String>,
}

impl CentersQuery {
    /// Convert wire parameters into a filter.
    ///
    /// # Returns
    /// * `Ok(CenterFilter)` for well-formed parameters
    /// * `Err` with the offending type value otherwise
    fn into_filter(self) -> Result<CenterFilter, String> {
        let center_type = match self.center_type.as_deref() {
            None => TypeSelection::All,
            Some(value) => {
                TypeSelection::parse(value).ok_or_else(|| value.to_string())?
            }
        };

        Ok(CenterFilter {
            provinces: self
                .province
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            center_type,
            query: self.q.unwrap_or_default(),
        })
    }
}

/// Response body for the centers listing.
///
/// On data-source failure `error` is set, `centers` is empty, and the status
/// stays 200 so the locator view can render its error state.
#[derive(Debug, Serialize)]
pub struct CentersResponse {
    pub locale: String,
    pub centers: Vec<Center>,
    /// Distinct provinces of the full (unfiltered) dataset, sorted.
    pub provinces: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// List centers for a locale, filtered by the query parameters.
pub async fn list_centers(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(params): Query<CentersQuery>,
) -> Result<Json<CentersResponse>, StatusCode> {
    let locale = Locale::from_tag(&locale).map_err(|_| StatusCode::NOT_FOUND)?;
    let filter = params.into_filter().map_err(|value| {
        info!("Rejecting centers request with unknown type '{}'", value);
        StatusCode::BAD_REQUEST
    })?;

    match state.centers.fetch(locale).await {
        Ok(centers) => {
            let provinces = distinct_provinces(&centers);
            Ok(Json(CentersResponse {
                locale: locale.tag().to_string(),
                centers: filter.apply(&centers),
                provinces,
                error: None,
            }))
        }
        Err(err) => {
            error!("Centers dataset unavailable for '{}': {}", locale, err);
            Ok(Json(CentersResponse {
                locale: locale.tag().to_string(),
                centers: Vec::new(),
                provinces: Vec::new(),
                error: Some(err.to_string()),
            }))
        }
    }
}

/// Minimal page response echoing the governing locale.
#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub locale: String,
    pub path: String,
}

/// Fallback handler for locale-prefixed page paths.
///
/// Page rendering proper lives outside this service; any path that survives
/// the guard is answered with the resolved locale and path so downstream
/// renderers (and tests) can observe the guard's decision.
pub async fn localized_page(
    State(state): State<AppState>,
    request: axum::extract::Request,
) -> Json<PageInfo> {
    let path = request.uri().path().to_string();
    let resolution = state.resolver.resolve(&path, None);

    Json(PageInfo {
        locale: resolution.locale.tag().to_string(),
        path,
    })
}
