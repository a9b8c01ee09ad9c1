use crate::api::AuthUser;
use crate::error::HubError;
use crate::server::router::HubState;
use crate::server::routes::require_body;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use chrono_tz::Tz;
use lifehub_schema::profile::{Profile, ProfilePatch};

pub fn router() -> Router<HubState> {
    Router::new().route("/profile", get(get_profile).put(upsert_profile))
}

/// A user with no stored row gets an empty default; reads never create.
async fn get_profile(
    State(state): State<HubState>,
    user: AuthUser,
) -> Result<Json<Profile>, HubError> {
    let profile = state
        .db
        .get_profile(&user.id)
        .await?
        .map_or_else(Profile::default, Profile::from);
    Ok(Json(profile))
}

async fn upsert_profile(
    State(state): State<HubState>,
    user: AuthUser,
    payload: Result<Json<ProfilePatch>, JsonRejection>,
) -> Result<Json<Profile>, HubError> {
    let body = require_body(payload)?;
    if let Some(tz) = &body.timezone {
        if tz.parse::<Tz>().is_err() {
            return Err(HubError::invalid(
                "timezone",
                format!("unknown timezone `{tz}`"),
            ));
        }
    }

    let row = state.db.upsert_profile(&user.id, body).await?;
    Ok(Json(Profile::from(row)))
}
