//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by handlers: [`ErrorCode`], message and optional details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with a caller-provided message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Bad payload or malformed ID
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Generic not found; `resource` is echoed in the details
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Error envelope returned with every non-2xx response
///
/// Success bodies are the plain JSON payload; only failures are wrapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("capacity must be at least 1")
            .with_detail("field", "capacity")
            .with_detail("min", 1);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "capacity");
        assert_eq!(details.get("min").unwrap(), 1);
    }

    #[test]
    fn test_not_found_names_resource() {
        let err = AppError::not_found("Route /nope");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Route /nope not found");
        assert_eq!(err.details.as_ref().unwrap()["resource"], "Route /nope");
        assert_eq!(AppError::database("down").code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::TableNotFound, "Table not found")
            .with_detail("id", "dining_table:t1");
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 7001);
        assert_eq!(response.message, "Table not found");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_without_details() {
        let json = r#"{"code":6001,"message":"Menu item not found"}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 6001);
        assert!(response.details.is_none());

        let out = serde_json::to_string(&response).unwrap();
        assert!(!out.contains("details"));
    }

    #[test]
    fn test_into_response_uses_code_status() {
        let response =
            AppError::with_message(ErrorCode::BranchHasTables, "Branch still has tables")
                .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
