//! Waitlist API endpoints
//!
//! - POST /api/waitlist - Add an email to the waitlist
//! - GET /api/health - Liveness plus storage health

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::db::models::SignupResponse;
use crate::core::signup::{ApiErrorBody, SignupError, SignupRequest, UNIQUE_VIOLATION_CODE};
use crate::core::validation::{ValidationError, validate_email};
use crate::core::waitlist::storage::WaitlistStorage;

/// Waitlist API state
#[derive(Clone)]
pub struct WaitlistApiState {
    pub storage: WaitlistStorage,
    /// Stored when a request arrives with a blank platform
    pub default_platform: String,
}

/// Errors surfaced by the waitlist endpoints
#[derive(Debug, thiserror::Error)]
pub enum WaitlistApiError {
    #[error("{0}")]
    InvalidEmail(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Email already exists")]
    AlreadySignedUp,

    #[error("Failed to save signup")]
    Storage(SignupError),
}

impl From<SignupError> for WaitlistApiError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::UniqueViolation => WaitlistApiError::AlreadySignedUp,
            other => WaitlistApiError::Storage(other),
        }
    }
}

/// Convert WaitlistApiError to API response
impl IntoResponse for WaitlistApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            WaitlistApiError::InvalidEmail(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_EMAIL"),
            WaitlistApiError::InvalidBody(rejection) => (rejection.status(), "INVALID_BODY"),
            WaitlistApiError::AlreadySignedUp => (StatusCode::CONFLICT, UNIQUE_VIOLATION_CODE),
            WaitlistApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ApiErrorBody::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
}

/// Create the waitlist API router
pub fn waitlist_api_router(state: WaitlistApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/waitlist", post(signup_handler))
        .route("/api/health", get(health_handler))
        .with_state(state)
}

/// POST /api/waitlist
async fn signup_handler(
    State(state): State<Arc<WaitlistApiState>>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), WaitlistApiError> {
    let Json(request) = payload?;
    validate_email(&request.email)?;

    let platform = match request.platform.trim() {
        "" => state.default_platform.clone(),
        platform => platform.to_string(),
    };

    tracing::debug!(
        "Waitlist signup attempt for email: {} (platform: {})",
        request.email,
        platform
    );

    match state.storage.insert(&request.email, &platform).await {
        Ok(signup) => {
            tracing::info!("Added waitlist signup (platform: {})", signup.platform);
            Ok((StatusCode::CREATED, Json(signup.into())))
        }
        Err(SignupError::UniqueViolation) => {
            tracing::info!("Rejected duplicate waitlist signup");
            Err(WaitlistApiError::AlreadySignedUp)
        }
        Err(e) => {
            tracing::error!("Failed to store waitlist signup: {}", e);
            Err(e.into())
        }
    }
}

/// GET /api/health
async fn health_handler(
    State(state): State<Arc<WaitlistApiState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = state.storage.kind().to_string();

    match state.storage.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                storage,
            }),
        ),
        Err(e) => {
            tracing::error!("Storage health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    storage,
                }),
            )
        }
    }
}
