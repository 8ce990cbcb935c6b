//! Common API DTOs and extractors

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Message body used for every error response and simple acknowledgments:
/// `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build a `(status, body)` rejection in one call
pub fn api_message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ApiMessage>) {
    (status, Json(ApiMessage::new(message)))
}

/// Map a repository failure that the handler has no specific answer for.
/// Detail goes to the log; the client sees the generic message.
pub fn storage_error(e: DomainError) -> (StatusCode, Json<ApiMessage>) {
    tracing::error!("storage error: {}", e);
    api_message(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
}

/// Paginated response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total item count across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}
