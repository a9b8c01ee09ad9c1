use crate::config::AuthServiceConfig;
use crate::error::HubError;
use axum::http::StatusCode;
use moka::sync::Cache;
use serde::Deserialize;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Identity resolved from a bearer token. The id is the auth service's
/// subject claim, taken verbatim; LifeHub keeps no user table of its own.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Arc<str>,
    pub email: Option<Arc<str>>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Client for the external auth service, with a token -> user cache so hot
/// sessions do not hit the service on every request.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    cfg: Arc<AuthServiceConfig>,
    cache: Cache<String, AuthUser>,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, cfg: AuthServiceConfig) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(cfg.cache_ttl_secs.max(1)))
            .max_capacity(10_000)
            .build();
        Self {
            http,
            cfg: Arc::new(cfg),
            cache,
        }
    }

    /// Resolve a bearer token to its user. 401/403 from the service means the
    /// token is bad; any other failure means the service itself is down.
    pub async fn resolve(&self, token: &str) -> Result<AuthUser, HubError> {
        if let Some(user) = self.cache.get(token) {
            return Ok(user);
        }

        let url = self.cfg.base_url.join("auth/v1/user")?;
        let resp = self
            .http
            .get(url)
            .bearer_auth(token)
            .header("apikey", self.cfg.anon_key.as_str())
            .send()
            .await?;

        match resp.status() {
            status if status.is_success() => {
                let text = resp.text().await?;
                let payload: UserPayload = serde_json::from_str(&text)?;
                let user = AuthUser {
                    id: Arc::from(payload.id.as_str()),
                    email: payload.email.map(|e| Arc::from(e.as_str())),
                };
                debug!(user_id = %user.id, "resolved bearer token");
                self.cache.insert(token.to_string(), user.clone());
                Ok(user)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(HubError::Unauthorized),
            status => Err(HubError::UpstreamStatus(status)),
        }
    }
}
