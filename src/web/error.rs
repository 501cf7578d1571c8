use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::activity_service::ActivityError;

/// Every failure leaves the API as `{"detail": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Activity(ActivityError),
    /// Request binding failed before the service ran.
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activity(ActivityError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Activity(ActivityError::AlreadySignedUp)
            | ApiError::Activity(ActivityError::NotRegistered) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Activity(e) => e.to_string(),
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}

impl From<ActivityError> for ApiError {
    fn from(e: ActivityError) -> Self {
        ApiError::Activity(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
