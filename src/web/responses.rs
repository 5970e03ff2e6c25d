//! HTTP response types and utilities

use axum::{
    Json,
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::services::StatsSnapshot;

/// JSON error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
    /// Acquisitions served since startup, across all tiers
    pub acquisitions: u64,
    pub stats: StatsSnapshot,
}

impl HealthResponse {
    pub fn healthy(stats: StatsSnapshot) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            acquisitions: stats.total(),
            stats,
        }
    }
}

/// Raw image body with extra headers
pub fn image(content_type: &'static str, bytes: Vec<u8>, headers: &[(&'static str, String)]) -> Response {
    let mut response = (StatusCode::OK, bytes).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    for &(name, ref value) in headers {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                response_headers.insert(HeaderName::from_static(name), value);
            }
            Err(e) => error!("Dropping invalid {} header value: {}", name, e),
        }
    }
    response
}

pub fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message.to_string())),
    )
        .into_response()
}

/// Map an [`AppError`] to a status code and JSON body
pub fn handle_error(error: AppError) -> Response {
    let (status, message) = match &error {
        AppError::Configuration { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::Source(_) | AppError::Http(_) => (
            StatusCode::BAD_GATEWAY,
            "Upstream image source failed".to_string(),
        ),
        AppError::Image(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Image encoding failed".to_string(),
        ),
        AppError::Cache(_) | AppError::Io(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Storage operation failed".to_string(),
        ),
        AppError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal error: {message}"),
        ),
    };

    error!("Request failed: {}", error);
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}
