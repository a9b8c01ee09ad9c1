use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum HubError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Resource not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Widget limit reached")]
    WidgetLimit,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Actor error: {0}")]
    Actor(String),

    #[error("Upstream request error: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("Upstream payload error: {0}")]
    UpstreamPayload(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl HubError {
    /// Shorthand for a field-level validation rejection.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        HubError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for HubError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            HubError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorObject {
                    code: "UNAUTHORIZED".to_string(),
                    message: "Authentication required.".to_string(),
                    details: None,
                },
            ),

            HubError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "VALIDATION".to_string(),
                    message: format!("Invalid `{field}`: {message}"),
                    details: Some(json!({ "field": field })),
                },
            ),

            HubError::NotFound => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: "Resource not found.".to_string(),
                    details: None,
                },
            ),

            HubError::Conflict(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "CONFLICT".to_string(),
                    message,
                    details: None,
                },
            ),

            HubError::WidgetLimit => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "WIDGET_LIMIT".to_string(),
                    message: "Widget limit reached (20 per user).".to_string(),
                    details: None,
                },
            ),

            // The driver's not-found sentinel and recognized constraint codes
            // get their own statuses; everything else is an opaque 500.
            HubError::Database(err) => match err {
                sqlx::Error::RowNotFound => (
                    StatusCode::NOT_FOUND,
                    ApiErrorObject {
                        code: "NOT_FOUND".to_string(),
                        message: "Resource not found.".to_string(),
                        details: None,
                    },
                ),
                err if err
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
                {
                    (
                        StatusCode::BAD_REQUEST,
                        ApiErrorObject {
                            code: "CONFLICT".to_string(),
                            message: "Resource already exists.".to_string(),
                            details: None,
                        },
                    )
                }
                err => {
                    error!(error = %err, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiErrorObject {
                            code: "INTERNAL_ERROR".to_string(),
                            message: "An internal server error occurred.".to_string(),
                            details: None,
                        },
                    )
                }
            },

            HubError::Actor(message) => {
                error!(error = %message, "db actor error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorObject {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                        details: None,
                    },
                )
            }

            HubError::UrlParse(err) => {
                error!(error = %err, "failed to build upstream url");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorObject {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                        details: None,
                    },
                )
            }

            HubError::Upstream(_) | HubError::UpstreamStatus(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorObject {
                    code: "UPSTREAM_ERROR".to_string(),
                    message: "Upstream service error.".to_string(),
                    details: None,
                },
            ),

            HubError::UpstreamPayload(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorObject {
                    code: "BAD_UPSTREAM_PAYLOAD".to_string(),
                    message: "Failed to parse upstream response.".to_string(),
                    details: None,
                },
            ),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
