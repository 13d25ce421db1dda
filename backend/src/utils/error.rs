use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;

use super::i18n::get_locale;

/// API Error surfaced by handlers
///
/// Generation failures never reach this type: the query service turns them
/// into the sentinel narrative before a response is built.
#[derive(Error, Debug)]
pub enum ApiError {
    // Lookup errors 3xxx
    #[error("Project {code} not found")]
    ProjectNotFound { code: String },

    // Validation errors 4xxx
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // System errors 5xxx
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Helper to create project not found error
    pub fn project_not_found(code: impl Into<String>) -> Self {
        Self::ProjectNotFound { code: code.into() }
    }

    /// Helper to create invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Helper to create internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::ProjectNotFound { .. } => 3001,
            Self::InvalidInput(_) => 4002,
            Self::InternalError(_) => 5001,
        }
    }

    /// Get localized error message based on current locale
    pub fn localized_message(&self) -> String {
        let locale = get_locale();
        match self {
            Self::ProjectNotFound { code } => {
                t!("project.not_found", locale = &locale, code = code).to_string()
            },
            Self::InvalidInput(msg) => {
                t!("validation.invalid_input", locale = &locale, message = msg).to_string()
            },
            Self::InternalError(msg) => {
                t!("internal.error", locale = &locale, message = msg).to_string()
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.error_code();
        let message = self.localized_message();

        let status = match code {
            3000..=3999 => StatusCode::NOT_FOUND,
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (status, Json(ApiErrorResponse { code, message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::i18n::with_locale;

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::project_not_found("TCGA-XYZ").error_code(), 3001);
        assert_eq!(ApiError::invalid_input("bad").error_code(), 4002);
        assert_eq!(ApiError::internal_error("boom").error_code(), 5001);
    }

    #[tokio::test]
    async fn test_not_found_message_is_localized() {
        let err = ApiError::project_not_found("TCGA-XYZ");

        let en = with_locale("en", async { err.localized_message() }).await;
        assert!(en.contains("TCGA-XYZ"));
        assert!(en.contains("not found"));

        let zh = with_locale("zh", async { err.localized_message() }).await;
        assert!(zh.contains("TCGA-XYZ"));
        assert!(zh.contains("未找到"));
    }

    #[test]
    fn test_not_found_status() {
        let resp = ApiError::project_not_found("TCGA-XYZ").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::invalid_input("bad").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::internal_error("boom").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
