//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::QueryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/journeys", get(get_journeys))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Journey options between two stations.
async fn get_journeys(
    State(state): State<AppState>,
    Query(req): Query<JourneysRequest>,
) -> Result<Json<JourneysResponse>, AppError> {
    let from = req.from.unwrap_or_default();
    let to = req.to.unwrap_or_default();

    let journeys = state.journeys.query_journeys(&from, &to).await?;

    Ok(Json(JourneysResponse {
        journeys: journeys.iter().map(JourneyResult::from_journey).collect(),
    }))
}

/// Application error type.
///
/// Server-side variants keep the underlying error as `detail` for the log;
/// only `message` reaches the client.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String, detail: String },
    Internal { message: String, detail: String },
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "invalid_input",
            AppError::NotFound { .. } => "station_not_found",
            AppError::Upstream { .. } => "upstream_unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidInput(message) => AppError::BadRequest { message },
            QueryError::StationNotFound { .. } => AppError::NotFound {
                message: "Could not find one or both Underground stations. Please check station names."
                    .to_string(),
            },
            QueryError::UpstreamUnavailable(source) => AppError::Upstream {
                message: "Failed to fetch journey data from TfL API".to_string(),
                detail: source.to_string(),
            },
            QueryError::Internal(detail) => AppError::Internal {
                message: "Internal server error while fetching journey data".to_string(),
                detail,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            AppError::BadRequest { message } | AppError::NotFound { message } => {
                warn!(status = %status, kind, "{message}");
                message
            }
            AppError::Upstream { message, detail } | AppError::Internal { message, detail } => {
                error!(status = %status, kind, error = %detail, "{message}");
                message
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}
