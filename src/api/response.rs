//! API response types

use serde::{Deserialize, Serialize};

/// Standard response envelope: `{ "data": ..., "meta": {...} }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

/// Pagination info
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Error body returned on non-2xx responses
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// `title: detail` of each error, joined; `None` when the body carried no errors
    pub fn summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }

        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| match (e.title.is_empty(), e.detail.is_empty()) {
                (false, false) => format!("{}: {}", e.title, e.detail),
                (true, false) => e.detail.clone(),
                _ => e.title.clone(),
            })
            .collect();

        Some(parts.join(", "))
    }
}

impl<T> ApiResponse<T> {
    pub fn total_pages(&self) -> u32 {
        self.meta
            .pagination
            .as_ref()
            .map(|p| p.total_pages)
            .unwrap_or(1)
    }
}
