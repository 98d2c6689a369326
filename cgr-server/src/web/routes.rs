//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, warn};

use crate::planner::{RouteQuery, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan", get(plan_summary))
        .route("/contacts", get(list_contacts))
        .route("/route", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summary of the loaded contact plan.
async fn plan_summary(State(state): State<AppState>) -> Json<PlanSummaryResponse> {
    Json(PlanSummaryResponse::from_plan(state.plan()))
}

/// Every contact in plan order.
async fn list_contacts(State(state): State<AppState>) -> Json<ContactsResponse> {
    let contacts = state
        .plan()
        .contacts()
        .iter()
        .map(ContactResult::from_contact)
        .collect();

    Json(ContactsResponse { contacts })
}

/// Plan a best-case route between two nodes.
async fn plan_route(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejected route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let query = RouteQuery::new(req.source, req.destination);
    let result = state.planner.search(query).await?;

    Ok(Json(RouteResponse::from_result(&result)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::InvalidQueryEndpoints { .. } => AppError::BadRequest { message },
            SearchError::IterationLimit { .. } => AppError::Unavailable { message },
            SearchError::UnknownContactReference(_)
            | SearchError::MissingPredecessor(_)
            | SearchError::Interrupted => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
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
