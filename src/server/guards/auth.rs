use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::warn;

fn bearer_token(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
}

/// User-tier guard: resolves the bearer token against the auth service and
/// hands the identity to the handler.
impl FromRequestParts<HubState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &HubState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(AuthError::MissingToken);
        };

        match state.auth.resolve(&token).await {
            Ok(user) => Ok(user),
            Err(HubError::Unauthorized) => Err(AuthError::InvalidToken),
            Err(err) => {
                warn!(error = %err, "auth service lookup failed");
                Err(AuthError::ServiceUnavailable)
            }
        }
    }
}

/// Service-tier guard: constant-time comparison of the presented bearer
/// against the configured service-role key.
#[derive(Debug, Clone, Copy)]
pub struct RequireServiceKey;

impl FromRequestParts<HubState> for RequireServiceKey {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &HubState,
    ) -> Result<Self, Self::Rejection> {
        let Some(key) = bearer_token(&parts.headers) else {
            return Err(AuthError::MissingToken);
        };

        let expected = state.service_key.as_ref();
        if !expected.is_empty() && bool::from(key.as_bytes().ct_eq(expected.as_bytes())) {
            Ok(RequireServiceKey)
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

pub enum AuthError {
    MissingToken,
    InvalidToken,
    ServiceUnavailable,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing bearer token.",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required.",
            ),
            AuthError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AUTH_UNAVAILABLE",
                "Auth service is unavailable.",
            ),
        };
        (
            status,
            Json(json!({ "error": { "code": code, "message": message } })),
        )
            .into_response()
    }
}
