//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::error;

use crate::db;
use crate::errors::IndexerError;
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

/// All API routes, without middleware.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/campaigns/:id/events", get(get_campaign_events))
        .route("/campaigns/:id/summary", get(get_campaign_summary))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CampaignEventsResponse {
    pub campaign_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

fn internal_error(e: IndexerError) -> Response {
    error!("API query failed: {e}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /campaigns/:id/events`
///
/// Every indexed event for one campaign, oldest first.
pub async fn get_campaign_events(
    State(state): State<Arc<ApiState>>,
    Path(campaign_id): Path<String>,
) -> Response {
    match db::get_events_for_campaign(&state.pool, &campaign_id).await {
        Ok(events) => Json(CampaignEventsResponse {
            campaign_id,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /campaigns/:id/summary`
///
/// Contribution count, total raised and closure status derived from the
/// campaign's events. 404 if nothing has been indexed for it.
pub async fn get_campaign_summary(
    State(state): State<Arc<ApiState>>,
    Path(campaign_id): Path<String>,
) -> Response {
    match db::campaign_summary(&state.pool, &campaign_id).await {
        Ok(Some(summary)) => Json(summary).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("no events indexed for campaign {campaign_id}"),
        ),
        Err(e) => internal_error(e),
    }
}

/// `GET /events`
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_all_events(&state.pool).await {
        Ok(events) => Json(AllEventsResponse {
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}
