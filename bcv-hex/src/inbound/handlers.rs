//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use bcv_types::{AppError, RateProvider, ToLocalQuery, ToUsdQuery};

use crate::ConversionService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: RateProvider> {
    pub service: ConversionService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint. Reports the refresh path without touching the source.
pub async fn health<R: RateProvider>(State(state): State<Arc<AppState<R>>>) -> impl IntoResponse {
    Json(state.service.health())
}

/// Current exchange rate.
#[tracing::instrument(skip(state))]
pub async fn rate<R: RateProvider>(State(state): State<Arc<AppState<R>>>) -> impl IntoResponse {
    Json(state.service.rate().await)
}

/// Convert US dollars to bolívares.
#[tracing::instrument(skip(state))]
pub async fn to_local<R: RateProvider>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<ToLocalQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = state.service.to_local(query.usd.as_deref()).await?;
    Ok(Json(resp))
}

/// Convert bolívares to US dollars.
#[tracing::instrument(skip(state))]
pub async fn to_usd<R: RateProvider>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<ToUsdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = state.service.to_usd(query.bs.as_deref()).await?;
    Ok(Json(resp))
}

/// OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
