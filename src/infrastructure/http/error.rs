//! HTTP Error Handling
//!
//! 与统一响应格式保持一致，但 HTTP 状态码与 errno 相同：
//! 账本返回的状态码原样透传给调用方

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            errno: i32::from(status.as_u16()),
            error: error.into(),
            data: None,
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UnsupportedMediaType(String),
    /// 账本拒绝调用（链码错误等），status 来自账本
    Upstream { status: u16, message: String },
    ServiceUnavailable(String),
    GatewayTimeout(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::GatewayTimeout(msg)
            | ApiError::Internal(msg) => msg,
            ApiError::Upstream { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.message();

        match &self {
            ApiError::BadRequest(_) | ApiError::UnsupportedMediaType(_) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Bad request");
            }
            ApiError::Upstream { .. } => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Ledger rejected call");
            }
            ApiError::ServiceUnavailable(_) | ApiError::GatewayTimeout(_) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Ledger unavailable");
            }
            ApiError::Internal(_) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Internal server error");
            }
        }

        (status, Json(ErrorResponse::new(status, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::LedgerRejected { status, message } => {
                ApiError::Upstream { status, message }
            }
            ApplicationError::LedgerUnavailable(msg) => ApiError::ServiceUnavailable(msg),
            ApplicationError::LedgerTimeout => {
                ApiError::GatewayTimeout("Ledger request timeout".to_string())
            }
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let err = ApiError::from(ApplicationError::missing_param("vin"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "vin is required");
    }

    #[test]
    fn test_upstream_status_is_relayed() {
        let err = ApiError::from(ApplicationError::LedgerRejected {
            status: 404,
            message: "Car not found".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_non_error_status_becomes_bad_gateway() {
        let err = ApiError::Upstream {
            status: 302,
            message: "moved".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_timeout_is_gateway_timeout() {
        let err = ApiError::from(ApplicationError::LedgerTimeout);
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_error_body_errno_matches_status() {
        let body = ErrorResponse::new(StatusCode::BAD_REQUEST, "vin is required");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"errno": 400, "error": "vin is required", "data": null})
        );
    }
}
