//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::StationId;
use crate::insights::{
    FleetOverview, StatusDistribution, availability_histogram, priority_alerts,
    rebalancing_candidates,
};
use crate::query::InvalidQueryState;
use crate::stations::StationError;
use crate::zones::sort_summaries;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:id", get(get_station))
        .route("/api/zones", get(list_zones))
        .route("/api/overview", get(overview))
        .route("/api/alerts", get(alerts))
        .route("/api/rebalancing", get(rebalancing))
        .route("/api/refresh", post(refresh))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// One page of stations, as JSON or as a table fragment.
async fn list_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StationQueryRequest>,
) -> Result<Response, AppError> {
    let query = req.to_state()?;
    let answer = state.registry.query(&query).await;

    if accepts_html(&headers) {
        let template = StationTableTemplate::from_result(&answer.result, answer.version);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;
        return Ok(Html(html).into_response());
    }

    Ok(Json(StationPageResponse::from_result(&answer.result, answer.version)).into_response())
}

/// A single station by id.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<StationResult>, AppError> {
    let not_found = || AppError::NotFound {
        message: format!("No station with id {id}"),
    };
    let id = StationId::new(id).map_err(|_| not_found())?;
    let station = state.registry.get(id).await.ok_or_else(not_found)?;
    Ok(Json(StationResult::from_station(&station)))
}

/// Per-zone summaries, optionally reordered.
async fn list_zones(
    State(state): State<AppState>,
    Query(req): Query<ZoneQueryRequest>,
) -> Result<Json<ZonesResponse>, AppError> {
    let (field, direction) = req.to_order()?;
    let mut summaries = state.registry.summarize().await;
    sort_summaries(&mut summaries, field, direction);

    Ok(Json(ZonesResponse {
        zones: summaries.iter().map(ZoneSummaryResult::from).collect(),
    }))
}

/// Fleet totals, status distribution and availability histogram.
async fn overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let snapshot = state.registry.snapshot().await;
    let stations = snapshot.stations();

    Json(OverviewResponse {
        overview: OverviewResult::from(&FleetOverview::compute(stations)),
        status: StatusDistributionResult::from(&StatusDistribution::compute(stations)),
        availability: availability_histogram(stations)
            .iter()
            .map(AvailabilityBucketResult::from)
            .collect(),
        snapshot_version: snapshot.version(),
        fetched_at: snapshot.fetched_at().to_rfc3339(),
    })
}

/// Stations needing attention: empty first, then in maintenance.
async fn alerts(
    State(state): State<AppState>,
    Query(req): Query<LimitRequest>,
) -> Result<Json<AlertsResponse>, AppError> {
    let limit = req.limit()?;
    let snapshot = state.registry.snapshot().await;
    let alerts = priority_alerts(snapshot.stations(), limit);

    Ok(Json(AlertsResponse {
        alerts: alerts.iter().map(AlertResult::from).collect(),
    }))
}

/// Stations with the lowest fill ratio.
async fn rebalancing(
    State(state): State<AppState>,
    Query(req): Query<LimitRequest>,
) -> Result<Json<RebalancingResponse>, AppError> {
    let limit = req.limit()?;
    let snapshot = state.registry.snapshot().await;
    let candidates = rebalancing_candidates(snapshot.stations(), limit);

    Ok(Json(RebalancingResponse {
        candidates: candidates.iter().map(RebalanceResult::from).collect(),
    }))
}

/// Fetch a new snapshot now.
async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, AppError> {
    let outcome = state.registry.refresh().await?;
    Ok(Json(RefreshResponse::from(outcome)))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<InvalidQueryState> for AppError {
    fn from(e: InvalidQueryState) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        match e {
            StationError::Snapshot(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
