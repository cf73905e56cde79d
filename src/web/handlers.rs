//! HTTP request handlers

use super::error::ApiError;
use super::response::ApiResponse;
use super::state::AppState;
use crate::catalog::Product;
use crate::query::SearchRequest;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

/// Query parameters for product search.
///
/// `limit` and `skip` stay strings here so that malformed numbers reach our
/// validation and come back as the JSON 400 envelope instead of a framework
/// rejection.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Maximum number of results
    pub limit: Option<String>,
    /// Number of leading matches to discard
    pub skip: Option<String>,
}

/// Root liveness probe
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": "Api is running"
    }))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Product search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let request = SearchRequest::from_params(
        params.q.as_deref(),
        params.limit.as_deref(),
        params.skip.as_deref(),
        &state.settings.search,
    )?;

    tracing::debug!(
        "searching catalog for {:?} (limit {}, skip {})",
        request.query,
        request.limit,
        request.skip
    );

    let hits = crate::search::search(
        state.catalog.products(),
        &request.query,
        request.limit,
        request.skip,
    );

    Ok(Json(ApiResponse::ok(
        "Products retrieved successfully",
        hits,
    )))
}
